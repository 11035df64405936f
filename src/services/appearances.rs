// src/services/appearances.rs

//! Appearance search across the stored corpus.
//!
//! Scans article bodies with a compiled matcher, producing per-article match
//! counts and bounded context windows, sorted by descending count.

use unicode_segmentation::UnicodeSegmentation;

use crate::models::{Appearance, Article, MatchContext};
use crate::services::matcher::WordMatcher;

/// Context window radius, in characters, on each side of a match.
const CONTEXT_CHARS: usize = 100;

/// At most this many context windows are stored per article; every match
/// still counts toward the total.
const MAX_CONTEXTS: usize = 5;

/// Find appearances of a compiled matcher across a corpus.
///
/// One entry per article with at least one match, sorted by count descending;
/// the sort is stable, so corpus order is preserved among equal counts.
/// Context capture is strictly left to right within an article.
pub fn find_appearances(matcher: &WordMatcher, corpus: &[Article]) -> Vec<Appearance> {
    let mut appearances: Vec<Appearance> = corpus
        .iter()
        .filter_map(|article| scan_article(matcher, article))
        .collect();

    appearances.sort_by(|a, b| b.count.cmp(&a.count));
    appearances
}

fn scan_article(matcher: &WordMatcher, article: &Article) -> Option<Appearance> {
    let content = article.content.as_str();
    let ranges = matcher.find_ranges(content);
    if ranges.is_empty() {
        return None;
    }

    let mut contexts = Vec::new();
    let mut chars_before = 0;
    let mut byte_cursor = 0;

    for range in &ranges {
        // Forward-advancing character offset; never rescans earlier text.
        chars_before += content[byte_cursor..range.start].chars().count();
        byte_cursor = range.start;

        if contexts.len() < MAX_CONTEXTS {
            contexts.push(MatchContext {
                text: context_window(content, range.start, range.end),
                position: chars_before,
            });
        }
    }

    Some(Appearance {
        article: article.to_ref(),
        count: ranges.len(),
        contexts,
    })
}

/// Up to [`CONTEXT_CHARS`] characters on each side of the match, clamped to
/// the content bounds and sliced on grapheme boundaries.
fn context_window(content: &str, start: usize, end: usize) -> String {
    let prefix = &content[..start];
    let window_start = prefix
        .grapheme_indices(true)
        .rev()
        .nth(CONTEXT_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);

    let suffix = &content[end..];
    let window_end = suffix
        .grapheme_indices(true)
        .nth(CONTEXT_CHARS)
        .map(|(i, _)| end + i)
        .unwrap_or(content.len());

    content[window_start..window_end].to_string()
}
