//! Storage abstractions for article and tracked-word persistence.
//!
//! The real database engine lives behind these traits; the crate ships an
//! in-memory reference implementation used by the CLI and the tests. The
//! only write discipline required of an implementation is that the upsert
//! be atomic per row, keyed by url.

pub mod memory;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::models::{Article, NewArticle, TrackedWord, User, WordOptions, WordWithOwner};

// Re-export for convenience
pub use memory::MemoryStore;

/// Result of an article upsert batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub upserted: usize,
}

/// Trait for article persistence backends.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Insert-or-update each item, keyed by url, atomic per row. Re-ingesting
    /// an existing url updates title and content in place without creating a
    /// duplicate row or changing `created_at`.
    async fn upsert_articles(&self, items: &[NewArticle]) -> Result<UpsertOutcome>;

    /// Stored articles, most recent first.
    async fn list_articles(&self, limit: usize) -> Result<Vec<Article>>;

    /// Stored article bodies only, most recent first.
    async fn list_article_contents(&self, limit: usize) -> Result<Vec<String>>;
}

/// Trait for user and tracked-word persistence backends.
#[async_trait]
pub trait WordStore: Send + Sync {
    async fn create_user(&self, name: &str) -> Result<User>;

    /// Delete a user. Ownership is exclusive, so the user's words go with
    /// them.
    async fn delete_user(&self, user_id: i64) -> Result<bool>;

    async fn add_word(
        &self,
        owner_user_id: i64,
        text: &str,
        options: WordOptions,
    ) -> Result<TrackedWord>;

    /// Delete a word, but only for its owner.
    async fn delete_word(&self, word_id: i64, owner_user_id: i64) -> Result<bool>;

    async fn list_user_words(&self, owner_user_id: i64, limit: usize) -> Result<Vec<TrackedWord>>;

    /// All tracked words joined with their owners' names, newest first.
    async fn list_all_words(&self, limit: usize) -> Result<Vec<WordWithOwner>>;

    async fn get_word_by_id(&self, word_id: i64) -> Result<Option<TrackedWord>>;
}

/// Opaque article identifier derived from the unique url.
pub fn article_id(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    hex::encode(&digest[..8])
}
