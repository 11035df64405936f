//! Tracked word and appearance data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ArticleRef;

/// A word or phrase tracked by a single user.
///
/// Ownership is exclusive: deleting the owning user cascades to their words.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackedWord {
    pub id: i64,
    pub owner_user_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,

    /// Expand the word into morphological variants when matching
    pub use_declensions: bool,

    /// Caller-supplied surface forms; when non-empty they replace generation
    pub declension_patterns: Vec<String>,

    /// Allow auto-generation from the suffix rule table
    pub stemming_enabled: bool,
}

impl TrackedWord {
    /// Expansion options carried by this word.
    pub fn options(&self) -> WordOptions {
        WordOptions {
            use_declensions: self.use_declensions,
            declension_patterns: self.declension_patterns.clone(),
            stemming_enabled: self.stemming_enabled,
        }
    }
}

/// Options controlling word form expansion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordOptions {
    pub use_declensions: bool,
    pub declension_patterns: Vec<String>,
    pub stemming_enabled: bool,
}

impl Default for WordOptions {
    fn default() -> Self {
        Self {
            use_declensions: false,
            declension_patterns: Vec::new(),
            stemming_enabled: true,
        }
    }
}

/// A tracked word joined with its owner's display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordWithOwner {
    pub word: TrackedWord,
    pub owner_name: String,
}

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Where and how often a tracked word appears in one article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appearance {
    pub article: ArticleRef,

    /// Total number of matches in the article body
    pub count: usize,

    /// Context windows for the first matches, capped at five
    pub contexts: Vec<MatchContext>,
}

/// A bounded text window around one match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchContext {
    pub text: String,

    /// Character offset of the match within the article content
    pub position: usize,
}
