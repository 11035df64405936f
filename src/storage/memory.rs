// src/storage/memory.rs

//! In-memory reference store.
//!
//! Single-process implementation of the storage traits behind one async
//! RwLock, which trivially satisfies the per-row atomicity the upsert
//! contract asks for. Recency ordering uses an insertion sequence as the
//! tie-break for identical timestamps.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::models::{Article, NewArticle, TrackedWord, User, WordOptions, WordWithOwner};
use crate::storage::{ArticleStore, UpsertOutcome, WordStore, article_id};

#[derive(Debug, Default)]
struct Inner {
    // url -> (insertion sequence, article)
    articles: HashMap<String, (u64, Article)>,
    article_seq: u64,

    users: HashMap<i64, User>,
    next_user_id: i64,

    // word id -> (insertion sequence, word)
    words: HashMap<i64, (u64, TrackedWord)>,
    word_seq: u64,
    next_word_id: i64,
}

/// In-memory store for articles, users and tracked words.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn upsert_articles(&self, items: &[NewArticle]) -> Result<UpsertOutcome> {
        let mut inner = self.inner.write().await;
        let mut upserted = 0;

        for item in items {
            if item.title.is_empty() || item.url.is_empty() || item.content.is_empty() {
                continue;
            }
            match inner.articles.get_mut(&item.url) {
                Some((_, existing)) => {
                    // Last write wins; identity and created_at stay put.
                    existing.title = item.title.clone();
                    existing.content = item.content.clone();
                }
                None => {
                    inner.article_seq += 1;
                    let seq = inner.article_seq;
                    inner.articles.insert(
                        item.url.clone(),
                        (
                            seq,
                            Article {
                                id: article_id(&item.url),
                                title: item.title.clone(),
                                url: item.url.clone(),
                                content: item.content.clone(),
                                created_at: Utc::now(),
                            },
                        ),
                    );
                }
            }
            upserted += 1;
        }

        Ok(UpsertOutcome { upserted })
    }

    async fn list_articles(&self, limit: usize) -> Result<Vec<Article>> {
        let limit = limit.clamp(1, 100);
        let inner = self.inner.read().await;

        let mut rows: Vec<(u64, Article)> = inner.articles.values().cloned().collect();
        rows.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| seq_b.cmp(seq_a))
        });
        Ok(rows
            .into_iter()
            .take(limit)
            .map(|(_, article)| article)
            .collect())
    }

    async fn list_article_contents(&self, limit: usize) -> Result<Vec<String>> {
        let limit = limit.clamp(1, 1000);
        let inner = self.inner.read().await;

        let mut rows: Vec<(u64, Article)> = inner.articles.values().cloned().collect();
        rows.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| seq_b.cmp(seq_a))
        });
        Ok(rows
            .into_iter()
            .take(limit)
            .map(|(_, article)| article.content)
            .collect())
    }
}

#[async_trait]
impl WordStore for MemoryStore {
    async fn create_user(&self, name: &str) -> Result<User> {
        if name.trim().is_empty() {
            return Err(AppError::validation("user name must not be empty"));
        }
        let mut inner = self.inner.write().await;
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            name: name.trim().to_string(),
            created_at: Utc::now(),
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_user(&self, user_id: i64) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let existed = inner.users.remove(&user_id).is_some();
        if existed {
            inner
                .words
                .retain(|_, (_, word)| word.owner_user_id != user_id);
        }
        Ok(existed)
    }

    async fn add_word(
        &self,
        owner_user_id: i64,
        text: &str,
        options: WordOptions,
    ) -> Result<TrackedWord> {
        if text.trim().is_empty() {
            return Err(AppError::validation("word is required"));
        }
        let mut inner = self.inner.write().await;
        if !inner.users.contains_key(&owner_user_id) {
            return Err(AppError::store(format!("no such user: {owner_user_id}")));
        }

        inner.next_word_id += 1;
        inner.word_seq += 1;
        let word = TrackedWord {
            id: inner.next_word_id,
            owner_user_id,
            text: text.trim().to_string(),
            created_at: Utc::now(),
            use_declensions: options.use_declensions,
            declension_patterns: options.declension_patterns,
            stemming_enabled: options.stemming_enabled,
        };
        let seq = inner.word_seq;
        inner.words.insert(word.id, (seq, word.clone()));
        Ok(word)
    }

    async fn delete_word(&self, word_id: i64, owner_user_id: i64) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let owned = inner
            .words
            .get(&word_id)
            .is_some_and(|(_, word)| word.owner_user_id == owner_user_id);
        if owned {
            inner.words.remove(&word_id);
        }
        Ok(owned)
    }

    async fn list_user_words(&self, owner_user_id: i64, limit: usize) -> Result<Vec<TrackedWord>> {
        let limit = limit.clamp(1, 500);
        let inner = self.inner.read().await;

        let mut rows: Vec<(u64, TrackedWord)> = inner
            .words
            .values()
            .filter(|(_, word)| word.owner_user_id == owner_user_id)
            .cloned()
            .collect();
        rows.sort_by(|(seq_a, _), (seq_b, _)| seq_b.cmp(seq_a));
        Ok(rows.into_iter().take(limit).map(|(_, word)| word).collect())
    }

    async fn list_all_words(&self, limit: usize) -> Result<Vec<WordWithOwner>> {
        let limit = limit.clamp(1, 1000);
        let inner = self.inner.read().await;

        let mut rows: Vec<(u64, TrackedWord)> = inner.words.values().cloned().collect();
        rows.sort_by(|(seq_a, _), (seq_b, _)| seq_b.cmp(seq_a));
        Ok(rows
            .into_iter()
            .take(limit)
            .map(|(_, word)| {
                let owner_name = inner
                    .users
                    .get(&word.owner_user_id)
                    .map(|u| u.name.clone())
                    .unwrap_or_default();
                WordWithOwner { word, owner_name }
            })
            .collect())
    }

    async fn get_word_by_id(&self, word_id: i64) -> Result<Option<TrackedWord>> {
        let inner = self.inner.read().await;
        Ok(inner.words.get(&word_id).map(|(_, word)| word.clone()))
    }
}
