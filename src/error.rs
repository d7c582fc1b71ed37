use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    #[error("invalid start url `{url}`")]
    InvalidStartUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("crawl depth must be at least 1")]
    InvalidDepth,
    #[error("failed to build http client")]
    HttpClient(#[from] reqwest::Error),
    #[error("failed to write {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize metadata")]
    Metadata(#[from] serde_json::Error),
}
