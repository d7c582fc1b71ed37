use url::Url;

pub mod crawler;
pub mod extract;
pub mod fetch;
pub mod frontier;
pub mod normalize;
pub mod persistent;

mod data;
mod error;

pub use data::{CrawlConfig, CrawlMetadata, LinkRecord};
pub use error::CrawlError;

/// Outcome of fetching one frontier entry. A failed fetch is an expected
/// dead end, not an error: the entry stays claimed and the crawl moves on.
pub enum FetchOutcome {
    Fetched(String),
    Failed(FetchFailure),
}

#[derive(Debug, thiserror::Error)]
pub enum FetchFailure {
    #[error("http status {0}")]
    Status(u16),
    #[error("not an html response ({0})")]
    NotHtml(String),
    #[error("network error: {0}")]
    Network(String),
}

#[async_trait::async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &Url) -> FetchOutcome;
}

pub trait LinkExtractor {
    fn extract_links(&self, html: &str) -> Vec<String>;
}

#[async_trait::async_trait]
pub trait PageStore {
    async fn save_page(&self, url: &Url, body: &str) -> Result<(), CrawlError>;
    async fn save_metadata(&self, records: &[LinkRecord]) -> Result<(), CrawlError>;
}
