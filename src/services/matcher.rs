// src/services/matcher.rs

//! Word form matcher compilation.
//!
//! Compiles a set of surface forms into one case-insensitive alternation.
//! Every form is escaped before assembly, so untrusted tracked-word text
//! cannot inject pattern syntax. Boundary safety (no match adjacent to a
//! Unicode letter, digit or underscore) is enforced during scanning, since
//! the regex engine itself has no look-around.

use std::collections::BTreeSet;
use std::ops::Range;

use regex::Regex;

use crate::error::{AppError, Result};

/// A compiled, boundary-safe, case-insensitive matcher for a word form set.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    regex: Regex,
}

/// Compile a form set into a matcher.
///
/// Forms are ordered longest-first in the alternation so a shorter form can
/// never shadow a longer one starting at the same offset; which alternative
/// reports a span is otherwise irrelevant, as only count and position are
/// consumed downstream.
pub fn compile(forms: &BTreeSet<String>) -> Result<WordMatcher> {
    let mut ordered: Vec<&str> = forms
        .iter()
        .map(String::as_str)
        .filter(|f| !f.is_empty())
        .collect();
    if ordered.is_empty() {
        return Err(AppError::validation("no word forms to compile"));
    }
    ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = ordered
        .iter()
        .map(|form| regex::escape(form))
        .collect::<Vec<_>>()
        .join("|");
    let regex = Regex::new(&format!("(?i)(?:{alternation})"))
        .map_err(|e| AppError::validation(format!("matcher compilation failed: {e}")))?;

    Ok(WordMatcher { regex })
}

impl WordMatcher {
    /// Byte ranges of all boundary-safe matches, strictly left to right.
    ///
    /// The scan advances past accepted matches and by one character past
    /// rejected candidates, so equal-text matches at different offsets are
    /// all found and none is counted twice.
    pub fn find_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut at = 0;
        while at <= text.len() {
            let Some(m) = self.regex.find_at(text, at) else {
                break;
            };
            if boundary_safe(text, m.start(), m.end()) {
                ranges.push(m.range());
                at = m.end();
            } else {
                at = next_char_boundary(text, m.start());
            }
        }
        ranges
    }

    /// Whether the text contains at least one boundary-safe match.
    pub fn is_match(&self, text: &str) -> bool {
        let mut at = 0;
        while at <= text.len() {
            let Some(m) = self.regex.find_at(text, at) else {
                return false;
            };
            if boundary_safe(text, m.start(), m.end()) {
                return true;
            }
            at = next_char_boundary(text, m.start());
        }
        false
    }
}

/// Neither neighbor of the span may be a word-like character.
fn boundary_safe(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    match text[index..].chars().next() {
        Some(c) => index + c.len_utf8(),
        None => text.len() + 1,
    }
}
