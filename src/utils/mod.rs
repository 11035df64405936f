//! Utility functions and helpers.

use url::Url;

/// Resolve a potentially relative href against a base URL.
///
/// Malformed hrefs yield `None` rather than an error so listing extraction
/// can drop them.
pub fn normalize_url(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(|u| u.to_string())
}

/// Collapse whitespace runs to single spaces and trim.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep the first item for every key, preserving order. Items whose key
/// function yields `None` are dropped.
pub fn dedupe_by<T, K, F>(items: Vec<T>, key_fn: F) -> Vec<T>
where
    K: std::hash::Hash + Eq,
    F: Fn(&T) -> Option<K>,
{
    let mut seen = std::collections::HashSet::new();
    let mut result = Vec::new();
    for item in items {
        if let Some(key) = key_fn(&item) {
            if seen.insert(key) {
                result.push(item);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        let base = Url::parse("https://example.com/path/").unwrap();
        assert_eq!(
            normalize_url(&base, "page.html"),
            Some("https://example.com/path/page.html".to_string())
        );
        assert_eq!(
            normalize_url(&base, "/root.html"),
            Some("https://example.com/root.html".to_string())
        );
        assert_eq!(
            normalize_url(&base, "https://other.com/x"),
            Some("https://other.com/x".to_string())
        );
        assert_eq!(normalize_url(&base, "http://[invalid"), None);
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  a \n\t b   c  "), "a b c");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_dedupe_by() {
        let items = vec![("a", 1), ("b", 2), ("a", 3)];
        let deduped = dedupe_by(items, |(k, _)| Some(k.to_string()));
        assert_eq!(deduped, vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_dedupe_by_drops_keyless_items() {
        let items = vec![Some("a"), None, Some("a")];
        let deduped = dedupe_by(items, |i| i.map(|s| s.to_string()));
        assert_eq!(deduped, vec![Some("a")]);
    }
}
