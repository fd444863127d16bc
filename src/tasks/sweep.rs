//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//! Lookups already purge lazily; this keeps memory bounded for caches that
//! are written more often than they are read.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;
use crate::config::CacheConfig;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Must be called from within a tokio runtime.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// on shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(Cache::new());
/// let sweep_handle = spawn_sweep_task(cache.clone(), 60);
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: Arc<Cache>, sweep_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired();

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}

/// Spawns the sweep task if `config` sets a sweep interval.
///
/// Returns `None` when `sweep_interval` is unset, leaving lazy sweeping on
/// lookup as the only eviction.
pub fn spawn_configured_sweep(cache: Arc<Cache>, config: &CacheConfig) -> Option<JoinHandle<()>> {
    match config.sweep_interval {
        Some(secs) => Some(spawn_sweep_task(cache, secs)),
        None => {
            debug!("No sweep interval configured; expired entries purge on lookup");
            None
        }
    }
}
