//! The most recent search results.

use crate::show::{Show, ShowId};

/// Ordered results of the latest accepted search, in catalog order.
///
/// Replaced wholesale on every accepted search and never persisted.
#[derive(Debug, Clone, Default)]
pub struct ResultCache {
    shows: Vec<Show>,
}

impl ResultCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new result set.
    pub fn replace(&mut self, shows: Vec<Show>) {
        self.shows = shows;
    }

    /// Drop all results.
    pub fn clear(&mut self) {
        self.shows.clear();
    }

    /// Find a show by id. Result sets are small, so this is a linear scan.
    pub fn find(&self, id: ShowId) -> Option<&Show> {
        self.shows.iter().find(|s| s.id == id)
    }

    /// Cached shows in catalog order.
    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn test_replace_keeps_order() {
        let mut cache = ResultCache::new();
        cache.replace(fixtures::search_results());

        let ids: Vec<u64> = cache.shows().iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_replace_discards_previous() {
        let mut cache = ResultCache::new();
        cache.replace(fixtures::search_results());
        cache.replace(vec![fixtures::show(9, "Dark")]);

        assert_eq!(cache.len(), 1);
        assert!(cache.find(ShowId(1)).is_none());
        assert!(cache.find(ShowId(9)).is_some());
    }

    #[test]
    fn test_clear() {
        let mut cache = ResultCache::new();
        cache.replace(fixtures::search_results());
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_find_missing() {
        let cache = ResultCache::new();
        assert!(cache.find(ShowId(1)).is_none());
    }
}
