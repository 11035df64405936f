// src/services/vocative.rs

//! External vocative lookup capability.
//!
//! The declension engine can consult an external lookup for the vocative of
//! a recognized name. The outcome is tri-state: `NotFound` and `Unavailable`
//! both fold to "no additional forms" at the call site.

/// Outcome of a vocative lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The word is a recognized name with a known vocative.
    Found {
        vocative: String,
        /// Transliterated variant, when the provider offers one
        vocative_alt: Option<String>,
    },
    /// The word is not in the provider's dictionary.
    NotFound,
    /// The provider could not be reached or failed.
    Unavailable,
}

/// Capability interface for vocative providers.
pub trait VocativeLookup: Send + Sync {
    fn lookup(&self, word: &str) -> LookupOutcome;
}

/// Built-in lookup backed by a small table of common Serbian given names,
/// with the Cyrillic spelling as the transliterated variant.
#[derive(Debug, Default, Clone)]
pub struct StaticVocatives;

const NAMES: &[(&str, &str, &str)] = &[
    ("dragan", "Dragane", "Драгане"),
    ("milan", "Milane", "Милане"),
    ("jovan", "Jovane", "Јоване"),
    ("stefan", "Stefane", "Стефане"),
    ("zoran", "Zorane", "Зоране"),
    ("petar", "Petre", "Петре"),
];

impl VocativeLookup for StaticVocatives {
    fn lookup(&self, word: &str) -> LookupOutcome {
        let key = word.to_lowercase();
        for (name, vocative, vocative_cyr) in NAMES {
            if key == *name {
                return LookupOutcome::Found {
                    vocative: (*vocative).to_string(),
                    vocative_alt: Some((*vocative_cyr).to_string()),
                };
            }
        }
        LookupOutcome::NotFound
    }
}
