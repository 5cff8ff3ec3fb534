//! Cache Engine Module
//!
//! Thread-safe handle around [`CacheStore`]. One mutex guards the map and the
//! eviction bookkeeping together, so every operation is linearizable.

use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{ttl_from_secs, CacheStats, CacheStore, PolicyKind};
use crate::config::Config;
use crate::error::Result;

// == KV Cache ==
/// Bounded, thread-safe key-value cache with TTL and LRU/LFU eviction.
///
/// Share it between threads with `Arc<KvCache>`. The handle is intentionally not
/// `Clone`: duplicating it would split the lock from the data it guards.
///
/// # Example
/// ```
/// use kv_cache::{KvCache, PolicyKind};
///
/// let cache = KvCache::new(2, PolicyKind::Lru).unwrap();
/// cache.set("user:1", "Alice", None);
/// cache.set("user:2", "Bob", None);
/// cache.get("user:1");
/// cache.set("user:3", "Charlie", None);
///
/// assert_eq!(cache.get("user:2"), None);
/// assert_eq!(cache.size(), 2);
/// ```
#[derive(Debug)]
pub struct KvCache {
    inner: Mutex<CacheStore>,
    capacity: usize,
    policy: PolicyKind,
}

impl KvCache {
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` when `capacity` is zero.
    pub fn new(capacity: usize, policy: PolicyKind) -> Result<Self> {
        let store = CacheStore::new(capacity, policy)?;
        debug!(capacity, %policy, "cache created");

        Ok(Self {
            inner: Mutex::new(store),
            capacity,
            policy,
        })
    }

    /// Creates a cache from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.capacity, config.policy)
    }

    // == Set ==
    /// Inserts or overwrites a key.
    ///
    /// `ttl_secs` absent or negative means the entry never expires. Always
    /// succeeds; a full cache evicts silently.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>, ttl_secs: Option<i64>) {
        self.set_with_ttl(key, value, ttl_from_secs(ttl_secs))
    }

    /// Inserts or overwrites a key with an exact time to live.
    pub fn set_with_ttl(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        ttl: Option<Duration>,
    ) {
        let (key, value) = (key.into(), value.into());
        self.inner.lock().set(key, value, ttl)
    }

    // == Get ==
    /// Returns the value for a live key, or None on miss or expiry.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key)
    }

    // == Delete ==
    /// Removes a key. Returns true if it was present and not expired.
    pub fn delete(&self, key: &str) -> bool {
        self.inner.lock().delete(key)
    }

    // == Size ==
    /// Returns the number of live entries.
    ///
    /// Scans the whole store and purges expired entries as it goes, so this is
    /// O(n) rather than a plain read.
    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    /// Removes every expired entry and returns how many were purged.
    pub fn purge_expired(&self) -> usize {
        self.inner.lock().purge_expired()
    }

    /// Returns a snapshot of the cache statistics. Does not purge.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> PolicyKind {
        self.policy
    }
}
