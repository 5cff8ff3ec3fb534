//! LFU Tracker Module
//!
//! Implements Least Frequently Used tracking for cache eviction.

use std::collections::HashMap;

use crate::cache::EvictionPolicy;

#[derive(Debug, Clone, Copy)]
struct Usage {
    /// Number of gets and sets since the key was inserted
    count: u64,
    /// Logical time of the most recent use
    last_used: u64,
}

// == LFU Tracker ==
/// Tracks access frequency for LFU eviction strategy.
///
/// Every get or set of a key bumps its counter by one. The eviction candidate is
/// the key with the lowest counter; among equal counters, the key whose last use
/// is oldest loses. Finding the candidate is a full scan, which only happens when
/// an insert pushes the store over capacity.
#[derive(Debug, Default)]
pub struct LfuTracker {
    usage: HashMap<String, Usage>,
    /// Logical clock stamped on every use
    tick: u64,
}

impl LfuTracker {
    // == Constructor ==
    /// Creates a new empty LFU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Frequency ==
    /// Returns the access count for a key, or None if untracked.
    pub fn frequency(&self, key: &str) -> Option<u64> {
        self.usage.get(key).map(|usage| usage.count)
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.usage.contains_key(key)
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

impl EvictionPolicy for LfuTracker {
    fn on_get(&mut self, key: &str) {
        let tick = self.next_tick();
        if let Some(usage) = self.usage.get_mut(key) {
            usage.count += 1;
            usage.last_used = tick;
        }
    }

    fn on_set(&mut self, key: &str) {
        let tick = self.next_tick();
        match self.usage.get_mut(key) {
            Some(usage) => {
                usage.count += 1;
                usage.last_used = tick;
            }
            None => {
                self.usage.insert(
                    key.to_string(),
                    Usage {
                        count: 1,
                        last_used: tick,
                    },
                );
            }
        }
    }

    fn on_del(&mut self, key: &str) {
        self.usage.remove(key);
    }

    fn evict_key(&self) -> Option<String> {
        self.usage
            .iter()
            .min_by_key(|(_, usage)| (usage.count, usage.last_used))
            .map(|(key, _)| key.clone())
    }

    fn len(&self) -> usize {
        self.usage.len()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lfu_new() {
        let lfu = LfuTracker::new();
        assert!(lfu.is_empty());
        assert_eq!(lfu.evict_key(), None);
    }

    #[test]
    fn test_lfu_set_starts_at_one() {
        let mut lfu = LfuTracker::new();

        lfu.on_set("a");

        assert_eq!(lfu.frequency("a"), Some(1));
        assert_eq!(lfu.frequency("b"), None);
    }

    #[test]
    fn test_lfu_overwrite_counts_as_use() {
        let mut lfu = LfuTracker::new();

        lfu.on_set("a");
        lfu.on_set("a");
        lfu.on_get("a");

        assert_eq!(lfu.frequency("a"), Some(3));
        assert_eq!(lfu.len(), 1);
    }

    #[test]
    fn test_lfu_get_untracked_key_is_ignored() {
        let mut lfu = LfuTracker::new();

        lfu.on_get("ghost");

        assert!(!lfu.contains("ghost"));
        assert!(lfu.is_empty());
    }

    #[test]
    fn test_lfu_evicts_lowest_count() {
        let mut lfu = LfuTracker::new();

        lfu.on_set("a");
        lfu.on_set("b");
        lfu.on_get("a");
        lfu.on_get("a");

        assert_eq!(lfu.evict_key(), Some("b".to_string()));
        // evict_key only nominates
        assert!(lfu.contains("b"));
    }

    #[test]
    fn test_lfu_tie_breaks_on_least_recent_use() {
        let mut lfu = LfuTracker::new();

        // Equal counts: the key used longest ago loses, regardless of name
        lfu.on_set("z");
        lfu.on_set("a");
        lfu.on_set("m");
        assert_eq!(lfu.evict_key(), Some("z".to_string()));

        lfu.on_get("z");
        lfu.on_get("a");
        lfu.on_get("m");
        assert_eq!(lfu.evict_key(), Some("z".to_string()));

        lfu.on_get("z");
        lfu.on_get("m");
        assert_eq!(lfu.evict_key(), Some("a".to_string()));
    }

    #[test]
    fn test_lfu_tie_evicts_older_insert() {
        let mut lfu = LfuTracker::new();

        lfu.on_set("old");
        lfu.on_set("new");

        // Both count 1, "old" was used first
        assert_eq!(lfu.evict_key(), Some("old".to_string()));
    }

    #[test]
    fn test_lfu_remove_is_idempotent() {
        let mut lfu = LfuTracker::new();

        lfu.on_set("a");
        lfu.on_del("a");
        lfu.on_del("a");
        lfu.on_del("never");

        assert!(lfu.is_empty());
    }

    #[test]
    fn test_lfu_reinsert_resets_count() {
        let mut lfu = LfuTracker::new();

        lfu.on_set("a");
        lfu.on_get("a");
        lfu.on_get("a");
        lfu.on_del("a");
        lfu.on_set("a");

        assert_eq!(lfu.frequency("a"), Some(1));
    }
}
