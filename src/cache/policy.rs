//! Eviction Policy Module
//!
//! Strategy abstraction deciding which key to sacrifice under capacity pressure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::{LfuTracker, LruTracker};
use crate::error::CacheError;

// == Eviction Policy Trait ==
/// Bookkeeping hooks the cache store calls as keys are used and removed.
///
/// A policy only tracks metadata. It never owns values and never removes keys
/// from the store itself: the store asks for a victim with [`evict_key`] and
/// then removes it, which in turn calls [`on_del`].
///
/// [`evict_key`]: EvictionPolicy::evict_key
/// [`on_del`]: EvictionPolicy::on_del
pub trait EvictionPolicy {
    /// Records a successful read of a key that is present in the store.
    fn on_get(&mut self, key: &str);

    /// Records an insert or overwrite of a key.
    fn on_set(&mut self, key: &str);

    /// Drops all bookkeeping for a key. No-op for untracked keys.
    fn on_del(&mut self, key: &str);

    /// Returns the key that should be evicted next, without removing it.
    ///
    /// Returns None only when nothing is tracked.
    fn evict_key(&self) -> Option<String>;

    /// Number of tracked keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// == Policy Kind ==
/// Eviction strategy selector, fixed when a cache is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Least recently used
    #[default]
    Lru,
    /// Least frequently used
    Lfu,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Lru => f.write_str("lru"),
            PolicyKind::Lfu => f.write_str("lfu"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(PolicyKind::Lru),
            "lfu" => Ok(PolicyKind::Lfu),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}

// == Policy ==
/// Statically dispatched eviction policy chosen at runtime by [`PolicyKind`].
#[derive(Debug)]
pub enum Policy {
    Lru(LruTracker),
    Lfu(LfuTracker),
}

impl Policy {
    /// Creates an empty policy of the given kind.
    pub fn new(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Lru => Policy::Lru(LruTracker::new()),
            PolicyKind::Lfu => Policy::Lfu(LfuTracker::new()),
        }
    }

    /// Returns which strategy this policy implements.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Lru(_) => PolicyKind::Lru,
            Policy::Lfu(_) => PolicyKind::Lfu,
        }
    }
}

impl From<PolicyKind> for Policy {
    fn from(kind: PolicyKind) -> Self {
        Policy::new(kind)
    }
}

impl EvictionPolicy for Policy {
    fn on_get(&mut self, key: &str) {
        match self {
            Policy::Lru(lru) => lru.on_get(key),
            Policy::Lfu(lfu) => lfu.on_get(key),
        }
    }

    fn on_set(&mut self, key: &str) {
        match self {
            Policy::Lru(lru) => lru.on_set(key),
            Policy::Lfu(lfu) => lfu.on_set(key),
        }
    }

    fn on_del(&mut self, key: &str) {
        match self {
            Policy::Lru(lru) => lru.on_del(key),
            Policy::Lfu(lfu) => lfu.on_del(key),
        }
    }

    fn evict_key(&self) -> Option<String> {
        match self {
            Policy::Lru(lru) => lru.evict_key(),
            Policy::Lfu(lfu) => lfu.evict_key(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Policy::Lru(lru) => EvictionPolicy::len(lru),
            Policy::Lfu(lfu) => EvictionPolicy::len(lfu),
        }
    }
}
