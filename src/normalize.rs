use url::Url;

/// Resolves a raw href against the page it was found on, yielding a
/// comparable absolute URL. Returns `None` for hrefs that do not denote a
/// crawlable page: empty strings, fragment-only links (same page), schemes
/// other than http(s), and anything that fails to parse.
pub fn normalize_link(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let mut url = base.join(href).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    // Fragments do not name distinct pages, so two hrefs differing only in
    // fragment must compare equal.
    url.set_fragment(None);
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base() -> Url {
        Url::parse("https://x.test/docs/a").unwrap()
    }

    #[test]
    fn test_absolute_href_passes_through() {
        let url = normalize_link("https://x.test/b", &base()).unwrap();
        assert_eq!(url.as_str(), "https://x.test/b");
    }

    #[test]
    fn test_resolves_root_relative_href() {
        let url = normalize_link("/b", &base()).unwrap();
        assert_eq!(url.as_str(), "https://x.test/b");
    }

    #[test]
    fn test_resolves_sibling_and_parent_hrefs() {
        let url = normalize_link("b", &base()).unwrap();
        assert_eq!(url.as_str(), "https://x.test/docs/b");

        let url = normalize_link("../b", &base()).unwrap();
        assert_eq!(url.as_str(), "https://x.test/b");
    }

    #[test]
    fn test_strips_fragment() {
        let url = normalize_link("b.html#section-2", &base()).unwrap();
        assert_eq!(url.as_str(), "https://x.test/docs/b.html");
    }

    #[test]
    fn test_rejects_fragment_only_href() {
        assert_eq!(normalize_link("#top", &base()), None);
    }

    #[test]
    fn test_rejects_empty_and_whitespace_hrefs() {
        assert_eq!(normalize_link("", &base()), None);
        assert_eq!(normalize_link("   ", &base()), None);
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        assert_eq!(normalize_link("mailto:someone@x.test", &base()), None);
        assert_eq!(normalize_link("javascript:void(0)", &base()), None);
        assert_eq!(normalize_link("tel:+123456", &base()), None);
        assert_eq!(normalize_link("ftp://x.test/file", &base()), None);
    }

    #[test]
    fn test_idempotent_on_absolute_fragment_free_urls() {
        let once = normalize_link("https://x.test/b?q=1", &base()).unwrap();
        let twice = normalize_link(once.as_str(), &base()).unwrap();
        assert_eq!(once, twice);
    }
}
