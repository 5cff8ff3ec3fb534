//! KV Cache demo
//!
//! Walks through the cache's eviction and TTL behaviour with tracing output.
//! Capacity, policy and the optional cleanup interval come from the environment
//! (see [`Config::from_env`]); the walkthrough itself always uses capacity 2.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kv_cache::{spawn_cleanup_task, Config, KvCache};

#[tokio::main]
async fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kv_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, policy={}, cleanup_interval={}s",
        config.capacity, config.policy, config.cleanup_interval
    );

    let cache = Arc::new(KvCache::new(2, config.policy)?);

    let cleanup_handle = (config.cleanup_interval > 0).then(|| {
        spawn_cleanup_task(
            cache.clone(),
            Duration::from_secs(config.cleanup_interval),
        )
    });

    cache.set("user:1", "Alice", None);
    cache.set("user:2", "Bob", None);

    if let Some(value) = cache.get("user:1") {
        info!("user:1 = {}", value);
    }

    // user:1 was just read; under LRU the next insert evicts user:2
    cache.set("user:3", "Charlie", None);

    if cache.get("user:2").is_none() {
        info!("user:2 was evicted ({})", cache.policy());
    }
    info!("Current size: {}", cache.size());

    for key in ["user:3", "user:1"] {
        if let Some(value) = cache.get(key) {
            info!("{} = {}", key, value);
        }
    }

    cache.set("temp", "123", Some(2));
    if let Some(value) = cache.get("temp") {
        info!("temp = {}", value);
    }
    info!("Current size: {}", cache.size());

    tokio::time::sleep(Duration::from_secs(3)).await;

    if cache.get("temp").is_none() {
        info!("temp expired due to TTL");
    }
    info!("Current size: {}", cache.size());

    let stats = cache.stats();
    info!(
        "Stats: {} (hit rate {:.2})",
        serde_json::to_string(&stats)?,
        stats.hit_rate()
    );

    if let Some(handle) = cleanup_handle {
        handle.abort();
    }

    // A larger cache built from the full configuration
    let configured = KvCache::from_config(&config)?;
    info!(
        "Configured cache ready: capacity={}, policy={}",
        configured.capacity(),
        configured.policy()
    );

    Ok(())
}
