//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and LRU/LFU eviction.

mod engine;
mod entry;
mod lfu;
mod lru;
mod policy;
mod stats;
mod store;


// Re-export public types
pub use engine::KvCache;
pub use entry::{ttl_from_secs, CacheEntry};
pub use lfu::LfuTracker;
pub use lru::LruTracker;
pub use policy::{EvictionPolicy, Policy, PolicyKind};
pub use stats::CacheStats;
pub use store::CacheStore;
