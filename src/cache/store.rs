//! Cache Store Module
//!
//! Cache engine state combining HashMap storage with a pluggable eviction policy
//! and TTL expiration. Not synchronized; see [`KvCache`](crate::cache::KvCache)
//! for the thread-safe handle.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, EvictionPolicy, Policy, PolicyKind};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Main cache storage with policy-driven eviction and lazy TTL expiration.
///
/// Every key in `entries` has exactly one record in `policy`. All removals go
/// through [`remove_key`](Self::remove_key) so the two never diverge.
#[derive(Debug)]
pub struct CacheStore<P = Policy> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Eviction bookkeeping
    policy: P,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl CacheStore<Policy> {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity and eviction policy.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` when `capacity` is zero.
    pub fn new(capacity: usize, kind: PolicyKind) -> Result<Self> {
        Self::with_policy(capacity, Policy::new(kind))
    }

    /// Returns which eviction strategy this store uses.
    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }
}

impl<P: EvictionPolicy> CacheStore<P> {
    /// Creates a new CacheStore around an existing (empty) policy.
    pub fn with_policy(capacity: usize, policy: P) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            entries: HashMap::with_capacity(capacity.min(1024)),
            policy,
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// Always succeeds. If the key already exists, the value and deadline are
    /// replaced in place and no eviction happens. If a new key pushes the store
    /// past capacity, exactly one entry chosen by the policy is evicted. Under LFU
    /// that can be the key just inserted, when every other key has been used more.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional time to live, None = never expires
    pub fn set(&mut self, key: String, value: String, ttl: Option<Duration>) {
        let entry = CacheEntry::new(value, ttl);

        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = entry;
            self.policy.on_set(&key);
            return;
        }

        self.policy.on_set(&key);
        self.entries.insert(key, entry);

        if self.entries.len() > self.capacity {
            self.evict_one();
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns None if the key is absent or expired. Expired entries are purged
    /// on discovery.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.expire_key(key);
            self.stats.record_miss();
            return None;
        }

        self.policy.on_get(key);
        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns true only if the key was present and live. An expired entry is
    /// still purged but reported as absent.
    pub fn delete(&mut self, key: &str) -> bool {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => return false,
        };

        if expired {
            self.expire_key(key);
            false
        } else {
            self.remove_key(key);
            true
        }
    }

    // == Size ==
    /// Returns the number of live entries, purging every expired one first.
    pub fn size(&mut self) -> usize {
        self.purge_expired();
        self.entries.len()
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.expire_key(key);
        }

        expired_keys.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of entries physically stored, including expired
    /// entries that have not been purged yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read access to the eviction bookkeeping.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    // == Removal ==
    /// Removes a key from storage and from the policy in one step.
    fn remove_key(&mut self, key: &str) -> Option<CacheEntry> {
        let removed = self.entries.remove(key);
        self.policy.on_del(key);
        removed
    }

    fn expire_key(&mut self, key: &str) {
        if self.remove_key(key).is_some() {
            self.stats.record_expiration();
            debug!(key, "purged expired entry");
        }
    }

    fn evict_one(&mut self) {
        if let Some(victim) = self.policy.evict_key() {
            if self.remove_key(&victim).is_some() {
                self.stats.record_eviction();
                debug!(key = %victim, capacity = self.capacity, "evicted entry");
            }
        }
    }
}
