//! Article data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate article found on a listing page, before detail enrichment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleStub {
    /// Article title
    pub title: String,

    /// Canonical absolute URL
    pub url: String,

    /// Source site name
    pub source: String,

    /// Coarse category from the listing
    pub category: String,

    /// Publication hint read from the listing, if any
    pub published: Option<String>,
}

/// Full metadata and cleaned body text extracted from one article page.
///
/// Every field falls back through candidates independently; a field that
/// yields no non-empty text stays `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDetail {
    pub title: Option<String>,
    pub published: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub main_image: Option<String>,
    pub tags: Vec<String>,
    pub content: Option<String>,
}

/// A listing stub merged with its extracted details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichedItem {
    pub title: String,
    pub url: String,
    pub source: String,
    pub category: String,
    pub published: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub main_image: Option<String>,
    pub tags: Vec<String>,
    pub content: Option<String>,
}

impl EnrichedItem {
    /// Merge a stub with its details. Detail fields win when present.
    pub fn merge(stub: &ArticleStub, detail: ArticleDetail) -> Self {
        Self {
            title: detail.title.unwrap_or_else(|| stub.title.clone()),
            url: stub.url.clone(),
            source: stub.source.clone(),
            category: detail.category.unwrap_or_else(|| stub.category.clone()),
            published: detail.published.or_else(|| stub.published.clone()),
            author: detail.author,
            description: detail.description,
            main_image: detail.main_image,
            tags: detail.tags,
            content: detail.content,
        }
    }

    /// Reduce to the minimal persisted payload, if complete.
    ///
    /// Items missing a title, url or content are not worth storing.
    pub fn into_new_article(self) -> Option<NewArticle> {
        let content = self.content.unwrap_or_default();
        if self.title.is_empty() || self.url.is_empty() || content.is_empty() {
            return None;
        }
        Some(NewArticle {
            title: self.title,
            url: self.url,
            content,
        })
    }
}

/// Minimal payload for the article upsert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub url: String,
    pub content: String,
}

/// A persisted article. `url` is the unique key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Opaque identifier assigned by the store
    pub id: String,

    pub title: String,
    pub url: String,
    pub content: String,

    /// Set on first insert, never changed by upserts
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Lightweight reference for appearance reports.
    pub fn to_ref(&self) -> ArticleRef {
        ArticleRef {
            id: self.id.clone(),
            title: self.title.clone(),
            url: self.url.clone(),
            created_at: self.created_at,
        }
    }
}

/// Reference to a stored article, without its body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleRef {
    pub id: String,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stub() -> ArticleStub {
        ArticleStub {
            title: "Listing title".to_string(),
            url: "https://example.com/a/1".to_string(),
            source: "N1 Info RS".to_string(),
            category: "Vesti".to_string(),
            published: Some("2026-08-01".to_string()),
        }
    }

    #[test]
    fn merge_prefers_detail_fields() {
        let detail = ArticleDetail {
            title: Some("Page title".to_string()),
            category: Some("Svet".to_string()),
            content: Some("Body".to_string()),
            ..ArticleDetail::default()
        };
        let item = EnrichedItem::merge(&sample_stub(), detail);
        assert_eq!(item.title, "Page title");
        assert_eq!(item.category, "Svet");
        assert_eq!(item.published.as_deref(), Some("2026-08-01"));
    }

    #[test]
    fn merge_falls_back_to_stub_fields() {
        let item = EnrichedItem::merge(&sample_stub(), ArticleDetail::default());
        assert_eq!(item.title, "Listing title");
        assert_eq!(item.category, "Vesti");
    }

    #[test]
    fn into_new_article_requires_content() {
        let item = EnrichedItem::merge(&sample_stub(), ArticleDetail::default());
        assert!(item.into_new_article().is_none());

        let detail = ArticleDetail {
            content: Some("Body".to_string()),
            ..ArticleDetail::default()
        };
        let item = EnrichedItem::merge(&sample_stub(), detail);
        let article = item.into_new_article().expect("complete item");
        assert_eq!(article.url, "https://example.com/a/1");
    }
}
