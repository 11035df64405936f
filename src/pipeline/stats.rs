// src/pipeline/stats.rs

//! Word statistics: expansion, matcher compilation, corpus search.
//!
//! Form sets and matchers are recomputed per query; nothing is cached across
//! requests.

use crate::error::Result;
use crate::models::{Appearance, WordOptions};
use crate::services::appearances::find_appearances;
use crate::services::declension::expand;
use crate::services::matcher::compile;
use crate::services::vocative::VocativeLookup;
use crate::storage::{ArticleStore, WordStore};

/// Articles scanned per appearance query, most recent first.
const CORPUS_LIMIT: usize = 100;

/// Find appearances of a word (with expansion options) across the stored
/// corpus.
pub async fn appearances_for_text(
    articles: &dyn ArticleStore,
    word: &str,
    options: &WordOptions,
    lookup: Option<&dyn VocativeLookup>,
) -> Result<Vec<Appearance>> {
    let forms = expand(word, options, lookup)?;
    let matcher = compile(&forms)?;
    let corpus = articles.list_articles(CORPUS_LIMIT).await?;
    Ok(find_appearances(&matcher, &corpus))
}

/// Find appearances for a stored tracked word. `None` when the word does not
/// exist.
pub async fn appearances_for_word(
    words: &dyn WordStore,
    articles: &dyn ArticleStore,
    word_id: i64,
    lookup: Option<&dyn VocativeLookup>,
) -> Result<Option<Vec<Appearance>>> {
    let Some(word) = words.get_word_by_id(word_id).await? else {
        return Ok(None);
    };
    let appearances = appearances_for_text(articles, &word.text, &word.options(), lookup).await?;
    Ok(Some(appearances))
}
