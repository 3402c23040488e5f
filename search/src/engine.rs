//! Substring filter over a candidate slice, with optional result caching.

use crate::config::SearchConfig;
use crate::query::Needle;
use std::sync::Arc;
use typeahead_core::BoundedRecencyCache;
use typeahead_core::types::Item;

/// Ordered match list. Shared between the cache and its readers.
pub type Matches = Arc<[Item]>;

/// Cache of match lists keyed by normalized query.
pub type MatchCache = BoundedRecencyCache<String, Matches>;

#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: SearchConfig,
}

impl MatchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the candidates whose name contains `query`, in input order.
    ///
    /// A blank query matches nothing.
    pub fn filter(&self, query: &str, candidates: &[Item]) -> Matches {
        match Needle::new(query, self.config.case_matching) {
            Some(needle) => collect(&needle, candidates),
            None => Vec::new().into(),
        }
    }

    /// Like [`filter`](Self::filter), memoized in `cache` by normalized query.
    ///
    /// `candidates` must not change while `cache` is in use; owners clear the
    /// cache when they swap the candidate collection.
    pub fn filter_cached(
        &self,
        query: &str,
        candidates: &[Item],
        cache: &mut MatchCache,
    ) -> Matches {
        let Some(needle) = Needle::new(query, self.config.case_matching) else {
            return Vec::new().into();
        };

        if let Some(hit) = cache.get(needle.key()) {
            tracing::trace!(query = needle.key(), matches = hit.len(), "match cache hit");
            return Arc::clone(hit);
        }

        let matches = collect(&needle, candidates);
        tracing::trace!(query = needle.key(), matches = matches.len(), "match cache miss");
        cache.put(needle.key().to_string(), Arc::clone(&matches));
        matches
    }
}

fn collect(needle: &Needle, candidates: &[Item]) -> Matches {
    candidates
        .iter()
        .filter(|item| needle.is_match(item.name()))
        .cloned()
        .collect()
}
