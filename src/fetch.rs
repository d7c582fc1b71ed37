use crate::error::CrawlError;
use crate::{FetchFailure, FetchOutcome, Fetcher};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("linkwalker/", env!("CARGO_PKG_VERSION"));

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<HttpFetcher, CrawlError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

fn is_html(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type.starts_with("text/html") || content_type.starts_with("application/xhtml+xml")
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> FetchOutcome {
        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Failed(FetchFailure::Network(e.to_string())),
        };

        let status = response.status();
        if !status.is_success() {
            return FetchOutcome::Failed(FetchFailure::Status(status.as_u16()));
        }

        if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or("");
            if !is_html(content_type) {
                return FetchOutcome::Failed(FetchFailure::NotHtml(content_type.to_string()));
            }
        }

        match response.text().await {
            Ok(body) => FetchOutcome::Fetched(body),
            Err(e) => FetchOutcome::Failed(FetchFailure::Network(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_html_accepts_html_content_types() {
        assert!(is_html("text/html"));
        assert!(is_html("text/html; charset=utf-8"));
        assert!(is_html("application/xhtml+xml"));
        assert!(is_html("TEXT/HTML"));
    }

    #[test]
    fn test_is_html_rejects_other_content_types() {
        assert!(!is_html("application/json"));
        assert!(!is_html("image/png"));
        assert!(!is_html("text/plain"));
    }
}
