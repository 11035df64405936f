//! Service layer for the wordwatch application.
//!
//! This module contains the business logic for:
//! - HTTP fetching (`Fetcher`)
//! - Listing and article page extraction (`listing`, `detail`)
//! - Bounded-concurrency mapping (`concurrency`)
//! - News orchestration (`NewsScraper`)
//! - Word form expansion and matching (`declension`, `matcher`,
//!   `appearances`, `vocative`)

pub mod appearances;
pub mod concurrency;
pub mod declension;
pub mod detail;
pub mod fetch;
pub mod listing;
pub mod matcher;
pub mod news;
pub mod vocative;

pub use fetch::Fetcher;
pub use news::NewsScraper;
