//! Expiry Sweep Task
//!
//! Background task that periodically reclaims expired cache entries.
//!
//! The cache already hides expired entries from readers; the sweep only
//! releases their memory, so running it is optional.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::DefinitionCache;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task runs in an infinite loop, sleeping for the given interval
/// between sweeps. Each sweep takes the cache's write lock briefly.
///
/// # Arguments
/// * `cache` - Shared cache to sweep
/// * `interval` - Time between sweep runs
///
/// # Returns
/// A JoinHandle for the spawned task, which the owner can abort during
/// shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(DefinitionCache::new(Duration::from_secs(30)));
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: Arc<DefinitionCache>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting expiry sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.sweep_expired();

            if removed > 0 {
                info!("Expiry sweep: reclaimed {} entries", removed);
            } else {
                debug!("Expiry sweep: nothing to reclaim");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DefinitionTypeKey;

    #[tokio::test]
    async fn test_sweep_task_reclaims_expired_entries() {
        let cache = Arc::new(DefinitionCache::new(Duration::from_millis(50)));
        cache
            .add_type_key("expire_soon", DefinitionTypeKey::new("UserDefinition", "user"))
            .unwrap();

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(40));

        // Wait for the entry to expire and a sweep to run.
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(cache.sweep_expired(), 0, "sweep task should have reclaimed the entry");

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_live_entries() {
        let cache = Arc::new(DefinitionCache::new(Duration::from_secs(3600)));
        cache
            .add_type_key("long_lived", DefinitionTypeKey::new("UserDefinition", "user"))
            .unwrap();

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(40));

        tokio::time::sleep(Duration::from_millis(150)).await;

        let fetched = cache.get_definition_type("long_lived").unwrap();
        assert!(fetched.is_some(), "live entry should not be reclaimed");

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache = Arc::new(DefinitionCache::new(Duration::from_secs(30)));

        let handle = spawn_sweep_task(cache, Duration::from_millis(40));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
