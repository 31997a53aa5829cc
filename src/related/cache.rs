//! Memoized pairwise similarity scores.
//!
//! Keys are normalized to the sorted id pair, so a lookup for `(b, a)`
//! hits the entry computed for `(a, b)`. Entries are never evicted or
//! overwritten; the cache lives as long as the service that owns it, and
//! correctness under document edits is the caller's responsibility.

use std::collections::HashMap;

/// In-memory cache of pairwise scores, keyed by unordered document id pair.
#[derive(Debug, Default)]
pub struct ScoreCache {
    entries: HashMap<(u64, u64), f32>,
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize an id pair so both orderings map to the same key.
    fn key(a: u64, b: u64) -> (u64, u64) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Return the cached score for the pair, computing and storing it on miss.
    pub fn get_or_compute<F>(&mut self, a: u64, b: u64, compute: F) -> f32
    where
        F: FnOnce() -> f32,
    {
        *self.entries.entry(Self::key(a, b)).or_insert_with(compute)
    }

    /// Peek at a cached score without computing.
    pub fn get(&self, a: u64, b: u64) -> Option<f32> {
        self.entries.get(&Self::key(a, b)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_computes_and_stores() {
        let mut cache = ScoreCache::new();
        assert!(cache.is_empty());

        let score = cache.get_or_compute(1, 2, || 0.42);
        assert_eq!(score, 0.42);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_hit_skips_compute() {
        let mut cache = ScoreCache::new();
        let mut calls = 0;

        cache.get_or_compute(1, 2, || {
            calls += 1;
            0.5
        });
        let score = cache.get_or_compute(1, 2, || {
            calls += 1;
            0.9
        });

        assert_eq!(calls, 1);
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_reversed_pair_hits_same_entry() {
        let mut cache = ScoreCache::new();
        cache.get_or_compute(7, 3, || 0.8);

        assert_eq!(cache.get(3, 7), Some(0.8));
        let score = cache.get_or_compute(3, 7, || panic!("reverse lookup must hit"));
        assert_eq!(score, 0.8);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_entries_never_overwritten() {
        let mut cache = ScoreCache::new();
        cache.get_or_compute(1, 2, || 0.1);
        cache.get_or_compute(1, 2, || 0.9);
        assert_eq!(cache.get(1, 2), Some(0.1));
    }

    #[test]
    fn test_distinct_pairs_are_distinct_entries() {
        let mut cache = ScoreCache::new();
        cache.get_or_compute(1, 2, || 0.1);
        cache.get_or_compute(1, 3, || 0.2);
        cache.get_or_compute(2, 3, || 0.3);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(3, 2), Some(0.3));
    }
}
