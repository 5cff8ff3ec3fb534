//! Background Tasks Module
//!
//! Contains optional background tasks a host can run alongside the cache.
//!
//! # Tasks
//! - TTL Cleanup: Purges expired cache entries at a fixed interval

mod cleanup;

pub use cleanup::{spawn_cleanup_task, MIN_CLEANUP_INTERVAL};
