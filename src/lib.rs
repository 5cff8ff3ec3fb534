//! KV Cache - A thread-safe in-memory key-value cache
//!
//! Bounded capacity with LRU or LFU eviction and lazy per-entry TTL expiration.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheStats, KvCache, PolicyKind};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
