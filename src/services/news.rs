// src/services/news.rs

//! News scraping service.
//!
//! Ties the fetcher and the extractors together: listing page to stubs,
//! stub to enriched item, many stubs under a concurrency bound.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{ArticleDetail, ArticleStub, Config, EnrichedItem};
use crate::services::concurrency::map_bounded;
use crate::services::fetch::Fetcher;
use crate::services::{detail, listing};

/// Service for fetching and extracting news articles.
pub struct NewsScraper {
    config: Arc<Config>,
    fetcher: Fetcher,
}

impl NewsScraper {
    /// Create a new scraper with the given configuration.
    pub fn new(config: Arc<Config>) -> Self {
        let fetcher = Fetcher::new(&config.scraper);
        Self { config, fetcher }
    }

    /// Fetch the listing page and parse it into article stubs.
    ///
    /// Zero stubs from both strategies means the site markup drifted beyond
    /// recognition; that is surfaced as [`AppError::ParseEmpty`] so the run
    /// boundary can log it.
    pub async fn list_articles(&self) -> Result<Vec<ArticleStub>> {
        let html = self.fetcher.fetch(&self.config.scraper.source_url).await?;
        let stubs = listing::parse_listing(&html, &self.config.scraper)?;
        if stubs.is_empty() {
            return Err(AppError::parse_empty(format!(
                "no article stubs on {}",
                self.config.scraper.source_url
            )));
        }
        Ok(stubs)
    }

    /// Fetch one article page and extract its details.
    pub async fn fetch_details(&self, url: &str) -> Result<ArticleDetail> {
        let html = self.fetcher.fetch(url).await?;
        detail::parse_details(&html, &self.config.scraper)
    }

    /// Enrich many stubs with at most `concurrency` fetches in flight.
    ///
    /// Output order matches input order; a failed item carries its own error
    /// and never aborts its siblings.
    pub async fn fetch_many(
        &self,
        stubs: &[ArticleStub],
        concurrency: usize,
    ) -> Vec<Result<EnrichedItem>> {
        map_bounded(stubs, concurrency, |stub| self.enrich(stub)).await
    }

    async fn enrich(&self, stub: &ArticleStub) -> Result<EnrichedItem> {
        let detail = self.fetch_details(&stub.url).await?;
        Ok(EnrichedItem::merge(stub, detail))
    }
}
