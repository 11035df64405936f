// src/models/mod.rs

//! Domain models for the wordwatch application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod article;
mod config;
mod word;

// Re-export all public types
pub use article::{Article, ArticleDetail, ArticleRef, ArticleStub, EnrichedItem, NewArticle};
pub use config::{Config, SchedulerConfig, ScraperConfig};
pub use word::{Appearance, MatchContext, TrackedWord, User, WordOptions, WordWithOwner};
