//! Counters kept by the store for every lookup and removal.
//!
//! A `CacheStats` value handed out by the cache is a snapshot: later
//! operations do not change it.

use serde::Serialize;

/// Lookup outcomes and removal causes since the cache was built.
///
/// `total_entries` counts resident entries, so an expired entry that no
/// operation has touched yet is still included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    /// Lookups of absent keys, plus lookups that found an expired entry
    pub misses: u64,
    /// Removals forced by a full cache
    pub evictions: u64,
    /// Removals of entries whose deadline had passed
    pub expirations: u64,
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of lookups that hit, in `0.0..=1.0`. Zero before any lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    /// `get` calls counted so far, hit or miss.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Entries removed by the cache itself; explicit deletes are not counted.
    pub fn removals(&self) -> u64 {
        self.evictions + self.expirations
    }

    // Store bookkeeping. Each call bumps a single counter.

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    pub(crate) fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_stats_are_zeroed() {
        let stats = CacheStats::new();
        assert_eq!(stats, CacheStats::default());
        assert_eq!(stats.lookups(), 0);
        assert_eq!(stats.removals(), 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_counts_misses() {
        let mut stats = CacheStats::new();
        for _ in 0..3 {
            stats.record_hit();
        }
        stats.record_miss();

        assert_eq!(stats.lookups(), 4);
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_removals_sum_evictions_and_expirations() {
        let mut stats = CacheStats::new();
        stats.record_eviction();
        stats.record_eviction();
        stats.record_expiration();

        assert_eq!((stats.evictions, stats.expirations), (2, 1));
        assert_eq!(stats.removals(), 3);
    }

    #[test]
    fn test_snapshot_serializes_every_counter() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.set_total_entries(3);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hits": 1,
                "misses": 0,
                "evictions": 0,
                "expirations": 0,
                "total_entries": 3
            })
        );
    }
}
