//! TTL Cleanup Task
//!
//! Optional background task that periodically purges expired cache entries.
//! Without it, expired entries are only removed when `get`, `delete` or `size`
//! observes them.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::KvCache;

/// Shortest pause between sweeps; smaller intervals are raised to this.
pub const MIN_CLEANUP_INTERVAL: Duration = Duration::from_millis(10);

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task loops forever, sleeping for `interval` between sweeps. Each sweep
/// holds the cache lock only for the duration of one `purge_expired` call.
///
/// # Arguments
/// * `cache` - Shared cache handle
/// * `interval` - Time between sweeps, raised to at least [`MIN_CLEANUP_INTERVAL`]
///
/// # Returns
/// A JoinHandle for the spawned task; abort it to stop sweeping.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(KvCache::new(1000, PolicyKind::Lru)?);
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: Arc<KvCache>, interval: Duration) -> JoinHandle<()> {
    let interval = interval.max(MIN_CLEANUP_INTERVAL);

    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "starting TTL cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired();

            if removed > 0 {
                info!(removed, "TTL cleanup removed expired entries");
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
