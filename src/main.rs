use clap::Parser;
use linkwalker::crawler;
use linkwalker::extract::AnchorExtractor;
use linkwalker::fetch::HttpFetcher;
use linkwalker::persistent::FsStore;
use linkwalker::{CrawlConfig, CrawlError, PageStore};
use std::path::PathBuf;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "linkwalker",
    about = "Crawl a website breadth-first, saving pages and a link-graph metadata file"
)]
struct Cli {
    /// Seed URL the crawl starts from
    start_url: String,

    /// Maximum crawl depth; the seed page is depth 1
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,

    /// Directory fetched pages are written into
    #[arg(long, default_value = "pages")]
    pages_dir: PathBuf,

    /// Path of the link metadata document
    #[arg(long, default_value = "metadata.json")]
    metadata: PathBuf,
}

async fn run(cli: Cli) -> Result<(), CrawlError> {
    let config = CrawlConfig::new(&cli.start_url, cli.depth)?;

    let fetcher = HttpFetcher::new()?;
    let store = FsStore::new(cli.pages_dir, cli.metadata.clone());

    let records = crawler::run(&config, &fetcher, &AnchorExtractor, &store).await?;
    store.save_metadata(&records).await?;

    info!(
        "Wrote {} link records to {}",
        records.len(),
        cli.metadata.display()
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
