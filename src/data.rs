use crate::error::CrawlError;
use serde::{Deserialize, Serialize};
use url::Url;

/// One discovered edge of the link graph: `url` was found as a hyperlink on
/// `page`, while `page` was being processed at `depth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub url: String,
    pub page: String,
    pub depth: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CrawlMetadata {
    pub pages: Vec<LinkRecord>,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub start_url: Url,
    pub max_depth: u32,
}

impl CrawlConfig {
    pub fn new(start_url: &str, max_depth: u32) -> Result<CrawlConfig, CrawlError> {
        let start_url = Url::parse(start_url).map_err(|source| CrawlError::InvalidStartUrl {
            url: start_url.to_string(),
            source,
        })?;
        if max_depth == 0 {
            return Err(CrawlError::InvalidDepth);
        }
        Ok(CrawlConfig {
            start_url,
            max_depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_start_url() {
        assert!(matches!(
            CrawlConfig::new("not a url", 2),
            Err(CrawlError::InvalidStartUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_depth() {
        assert!(matches!(
            CrawlConfig::new("https://x.test/a", 0),
            Err(CrawlError::InvalidDepth)
        ));
    }
}
