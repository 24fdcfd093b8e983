//! Conditional request support for served assets
//!
//! Every served file is tagged with an `ETag`; clients revalidate with
//! `If-None-Match` and get a 304 when the bytes are unchanged.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compute the quoted `ETag` for a file's bytes.
pub fn etag_for(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Whether an `If-None-Match` header revalidates against `etag`.
///
/// Accepts a comma-separated candidate list and the `*` wildcard.
pub fn revalidates(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|candidates| {
        candidates
            .split(',')
            .any(|c| c.trim() == etag || c.trim() == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_is_quoted_and_stable() {
        let a = etag_for(b"body { margin: 0 }");
        let b = etag_for(b"body { margin: 0 }");
        assert_eq!(a, b);
        assert!(a.starts_with('"') && a.ends_with('"'));
    }

    #[test]
    fn test_etag_differs_per_content() {
        assert_ne!(etag_for(b"v1"), etag_for(b"v2"));
    }

    #[test]
    fn test_revalidation() {
        let etag = "\"cafe01\"";
        assert!(revalidates(Some("\"cafe01\""), etag));
        assert!(revalidates(Some("\"other\", \"cafe01\""), etag));
        assert!(revalidates(Some("*"), etag));
        assert!(!revalidates(Some("\"other\""), etag));
        assert!(!revalidates(None, etag));
    }
}
