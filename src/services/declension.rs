// src/services/declension.rs

//! Word form expansion.
//!
//! Expands a tracked word into its Serbian surface forms using a fixed
//! suffix rule table plus a possessive heuristic. The engine is a pure
//! function of its inputs; identical inputs always yield the identical set.

use std::collections::BTreeSet;

use crate::error::{AppError, Result};
use crate::models::WordOptions;
use crate::services::vocative::{LookupOutcome, VocativeLookup};

/// Suffix rules: base suffix and its case suffixes
/// (genitive, dative, accusative, instrumental, locative).
///
/// Order matters: destemming and generation both stop at the first rule that
/// matches, so more specific masculine rules precede the broad feminine `a`.
const DECLENSION_RULES: &[(&str, [&str; 5])] = &[
    // Masculine nouns/adjectives
    ("an", ["ana", "anu", "ana", "anom", "anu"]),
    ("in", ["ina", "inu", "ina", "inom", "inu"]),
    ("ski", ["skog", "skom", "skog", "skim", "skom"]),
    ("ev", ["eva", "evu", "eva", "evim", "evu"]),
    ("ov", ["ova", "ovu", "ova", "ovim", "ovu"]),
    ("ić", ["ića", "iću", "ića", "ićem", "iću"]),
    ("ak", ["ka", "ku", "ka", "kom", "ku"]),
    // Feminine nouns
    ("a", ["e", "i", "u", "om", "i"]),
    ("ica", ["ice", "ici", "icu", "icom", "ici"]),
    ("ka", ["ke", "ki", "ku", "kom", "ki"]),
    ("ija", ["ije", "iji", "iju", "ijom", "iji"]),
    ("nja", ["nje", "nji", "nju", "njom", "nji"]),
];

/// Expand a word into its set of surface forms, always including the word
/// itself.
///
/// - declensions off: just the word.
/// - caller-supplied patterns: the word plus the patterns, verbatim.
/// - otherwise, with stemming enabled: destem, generate from the rule table,
///   apply the possessive heuristic, and consult the optional vocative
///   lookup. Lookup failures add nothing.
pub fn expand(
    word: &str,
    options: &WordOptions,
    lookup: Option<&dyn VocativeLookup>,
) -> Result<BTreeSet<String>> {
    if word.trim().is_empty() {
        return Err(AppError::validation("word must not be empty"));
    }

    let mut forms = BTreeSet::new();
    forms.insert(word.to_string());

    if !options.use_declensions {
        return Ok(forms);
    }

    if !options.declension_patterns.is_empty() {
        for pattern in &options.declension_patterns {
            if pattern.trim().is_empty() {
                return Err(AppError::validation(
                    "declension patterns must not be empty",
                ));
            }
            forms.insert(pattern.clone());
        }
        return Ok(forms);
    }

    if options.stemming_enabled {
        generate_forms(word, &mut forms, lookup);
    }

    Ok(forms)
}

/// Auto-generation: destem, generate, possessives, vocative.
fn generate_forms(word: &str, forms: &mut BTreeSet<String>, lookup: Option<&dyn VocativeLookup>) {
    // Destemming pass: the word may itself be a declined form. First rule
    // whose case suffix matches wins; table order is the tie-break.
    let mut base = word.to_string();
    'destem: for (base_suffix, case_suffixes) in DECLENSION_RULES {
        for case_suffix in case_suffixes {
            if let Some(stem) = strip_suffix_ci(word, case_suffix) {
                let candidate = format!("{stem}{base_suffix}");
                forms.insert(candidate.clone());
                base = candidate;
                break 'destem;
            }
        }
    }

    // Generation pass from the (possibly destemmed) base form. Only the
    // first matching rule is ever applied.
    for (base_suffix, case_suffixes) in DECLENSION_RULES {
        if let Some(stem) = strip_suffix_ci(&base, base_suffix) {
            forms.insert(format!("{stem}{base_suffix}"));
            for case_suffix in case_suffixes {
                forms.insert(format!("{stem}{case_suffix}"));
            }
            break;
        }
    }

    // Possessive heuristic for names.
    let lower = base.to_lowercase();
    if !lower.ends_with(['a', 'e', 'i', 'o', 'u']) {
        for suffix in ["ev", "evom", "eva", "evoj"] {
            forms.insert(format!("{base}{suffix}"));
        }
    } else if lower.ends_with('a') {
        if let Some(stem) = strip_suffix_ci(&base, "a") {
            for suffix in ["in", "ina", "inoj"] {
                forms.insert(format!("{stem}{suffix}"));
            }
        }
    }

    // Vocative, when the capability recognizes the word.
    if let Some(lookup) = lookup {
        if let LookupOutcome::Found {
            vocative,
            vocative_alt,
        } = lookup.lookup(word)
        {
            forms.insert(vocative);
            if let Some(alt) = vocative_alt {
                forms.insert(alt);
            }
        }
    }
}

/// Strip `suffix` from the end of `word`, comparing case-insensitively while
/// preserving the original casing of the stem.
fn strip_suffix_ci<'w>(word: &'w str, suffix: &str) -> Option<&'w str> {
    if word.len() < suffix.len() {
        return None;
    }
    let split = word.len() - suffix.len();
    if !word.is_char_boundary(split) {
        return None;
    }
    if word[split..].to_lowercase() == suffix {
        Some(&word[..split])
    } else {
        None
    }
}
