use crate::data::{CrawlConfig, LinkRecord};
use crate::error::CrawlError;
use crate::frontier::{Frontier, FrontierEntry, VisitedSet};
use crate::normalize::normalize_link;
use crate::{FetchOutcome, Fetcher, LinkExtractor, PageStore};
use tracing::{debug, info, warn};

/// All traversal state for one crawl run. Nothing survives the call: the
/// visited set, the frontier and the record log are dropped (or returned)
/// when `run` returns.
struct CrawlSession {
    visited: VisitedSet,
    frontier: Frontier,
    records: Vec<LinkRecord>,
}

impl CrawlSession {
    fn new(config: &CrawlConfig) -> CrawlSession {
        let mut visited = VisitedSet::new();
        let mut frontier = Frontier::new();

        // The seed is claimed at enqueue time like every other URL, so a
        // link back to it is never pushed a second time.
        visited.try_claim(&config.start_url);
        frontier.push(FrontierEntry {
            url: config.start_url.clone(),
            depth: 1,
        });

        CrawlSession {
            visited,
            frontier,
            records: Vec::new(),
        }
    }
}

/// Walks the site breadth-first from `config.start_url` and returns every
/// discovered link edge in discovery order.
///
/// Fetch failures are dead ends: the entry stays claimed, nothing is
/// persisted or recorded for it, and the walk continues. Persistence
/// failures abort the run.
pub async fn run<F, E, S>(
    config: &CrawlConfig,
    fetcher: &F,
    extractor: &E,
    store: &S,
) -> Result<Vec<LinkRecord>, CrawlError>
where
    F: Fetcher,
    E: LinkExtractor,
    S: PageStore,
{
    let mut session = CrawlSession::new(config);

    while let Some(entry) = session.frontier.pop() {
        debug!("Visit {} (depth {})", entry.url, entry.depth);

        let body = match fetcher.fetch(&entry.url).await {
            FetchOutcome::Fetched(body) => body,
            FetchOutcome::Failed(reason) => {
                warn!("Skipping {}: {}", entry.url, reason);
                continue;
            }
        };

        store.save_page(&entry.url, &body).await?;

        let page = entry.url.as_str();
        for href in extractor.extract_links(&body) {
            let Some(link) = normalize_link(&href, &entry.url) else {
                continue;
            };

            // Every surviving edge is logged, duplicate targets included;
            // the visited set only gates expansion, not recording.
            session.records.push(LinkRecord {
                url: link.to_string(),
                page: page.to_string(),
                depth: entry.depth,
            });

            if entry.depth < config.max_depth && session.visited.try_claim(&link) {
                session.frontier.push(FrontierEntry {
                    url: link,
                    depth: entry.depth + 1,
                });
            }
        }
    }

    info!(
        "Crawl finished: {} links discovered across {} pages",
        session.records.len(),
        session.visited.len()
    );
    Ok(session.records)
}
