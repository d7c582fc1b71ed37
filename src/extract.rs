use crate::LinkExtractor;
use lazy_static::lazy_static;
use scraper::{Html, Selector};

lazy_static! {
    static ref A: Selector = Selector::parse("a").expect("Invalid selector");
}

/// Yields every `href` of every anchor in document order, untouched. All
/// typing and filtering happens later in the normalizer.
#[derive(Debug)]
pub struct AnchorExtractor;

impl LinkExtractor for AnchorExtractor {
    fn extract_links(&self, html: &str) -> Vec<String> {
        let doc = Html::parse_document(html);
        doc.select(&A)
            .filter_map(|a| a.value().attr("href"))
            .map(ToString::to_string)
            .collect()
    }
}
