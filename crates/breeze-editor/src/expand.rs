//! Template expansion for container blocks.
//!
//! A container with a configurable child count (the accordion's "items"
//! control) expands to that many default child specs when, and only when,
//! it has no children yet. The session memoizes expansions per
//! `(child type, count)` pair so repeated render passes reuse the same
//! specs instead of regenerating them.

use std::collections::HashMap;

/// A default child to create during template expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildSpec {
    pub type_id: String,
}

/// Expand a count-driven template into `count` default child specs.
pub fn expand_counted(child: &str, count: usize) -> Vec<ChildSpec> {
    (0..count)
        .map(|_| ChildSpec {
            type_id: child.to_string(),
        })
        .collect()
}

/// Per-session memo of count-driven template expansions.
#[derive(Debug, Default)]
pub struct TemplateCache {
    memo: HashMap<(String, usize), Vec<ChildSpec>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expansion for `(child, count)`, computed once per session.
    pub fn counted(&mut self, child: &str, count: usize) -> &[ChildSpec] {
        self.memo
            .entry((child.to_string(), count))
            .or_insert_with(|| expand_counted(child, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn expands_to_exact_count() {
        let specs = expand_counted("breezeblocks/accordion-item", 3);
        assert_eq!(specs.len(), 3);
        assert!(specs.iter().all(|s| s.type_id == "breezeblocks/accordion-item"));
    }

    #[test]
    fn zero_count_expands_to_nothing() {
        assert!(expand_counted("ns/item", 0).is_empty());
    }

    #[test]
    fn cache_returns_identical_expansion() {
        let mut cache = TemplateCache::new();
        let first = cache.counted("ns/item", 4).to_vec();
        let second = cache.counted("ns/item", 4).to_vec();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }
}
