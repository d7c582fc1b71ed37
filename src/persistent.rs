use crate::data::{CrawlMetadata, LinkRecord};
use crate::error::CrawlError;
use crate::PageStore;
use lazy_regex::regex;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use url::Url;

/// Filesystem persistence: one `.html` file per fetched page under
/// `pages_dir`, plus a single JSON metadata document for the whole run.
pub struct FsStore {
    pages_dir: PathBuf,
    metadata_path: PathBuf,
}

impl FsStore {
    pub fn new(pages_dir: PathBuf, metadata_path: PathBuf) -> FsStore {
        FsStore {
            pages_dir,
            metadata_path,
        }
    }

    // Last non-empty path segment, sanitized to a portable file name.
    // Distinct URLs may collide here; the metadata document, keyed by full
    // URL, stays authoritative.
    fn page_file_name(url: &Url) -> String {
        let segment = url
            .path_segments()
            .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
            .unwrap_or("index");
        let name = regex!(r"[^A-Za-z0-9._-]").replace_all(segment, "_");
        if name.ends_with(".html") {
            name.into_owned()
        } else {
            format!("{name}.html")
        }
    }
}

async fn write(path: &Path, contents: &str) -> Result<(), CrawlError> {
    fs::write(path, contents)
        .await
        .map_err(|source| CrawlError::Persist {
            path: path.to_path_buf(),
            source,
        })
}

#[async_trait::async_trait]
impl PageStore for FsStore {
    async fn save_page(&self, url: &Url, body: &str) -> Result<(), CrawlError> {
        fs::create_dir_all(&self.pages_dir)
            .await
            .map_err(|source| CrawlError::Persist {
                path: self.pages_dir.clone(),
                source,
            })?;

        let path = self.pages_dir.join(FsStore::page_file_name(url));
        write(&path, body).await?;
        debug!("Saved {} as {}", url, path.display());
        Ok(())
    }

    async fn save_metadata(&self, records: &[LinkRecord]) -> Result<(), CrawlError> {
        let metadata = CrawlMetadata {
            pages: records.to_vec(),
        };
        write(&self.metadata_path, &serde_json::to_string_pretty(&metadata)?).await
    }
}
