// src/pipeline/ingest.rs

//! One ingestion run: listing, bounded enrichment, filter, upsert.

use crate::error::Result;
use crate::models::SchedulerConfig;
use crate::services::NewsScraper;
use crate::storage::ArticleStore;

/// Counters for one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    /// Stubs selected for enrichment
    pub requested: usize,
    /// Items enriched with details
    pub scraped: usize,
    /// Rows upserted into the store
    pub saved: usize,
}

/// Run one ingestion pass.
///
/// Item-level fetch and extraction failures are logged and skipped; only
/// items with a non-empty title, url and content reach the upsert.
pub async fn run_ingest_once(
    scraper: &NewsScraper,
    store: &dyn ArticleStore,
    config: &SchedulerConfig,
) -> Result<IngestOutcome> {
    let mut stubs = scraper.list_articles().await?;
    stubs.truncate(config.limit);
    let requested = stubs.len();

    let results = scraper.fetch_many(&stubs, config.concurrency).await;

    let mut scraped = 0;
    let mut complete = Vec::new();
    for result in results {
        match result {
            Ok(item) => {
                scraped += 1;
                if let Some(article) = item.into_new_article() {
                    complete.push(article);
                }
            }
            Err(error) => log::warn!("Failed to enrich article: {error}"),
        }
    }

    let outcome = store.upsert_articles(&complete).await?;
    log::info!(
        "Ingest run: requested={requested} scraped={scraped} saved={}",
        outcome.upserted
    );

    Ok(IngestOutcome {
        requested,
        scraped,
        saved: outcome.upserted,
    })
}
