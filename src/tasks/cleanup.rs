//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired entries.
///
/// Reads already ignore expired entries; the sweep only bounds memory held by
/// keys nobody asks for again.
///
/// # Arguments
/// * `cache` - shared store to sweep
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let prices = PriceCache::new(21_600);
/// let cleanup_handle = spawn_cleanup_task(prices.store_handle(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(
    cache: Arc<RwLock<CacheStore<V>>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and sweep expired entries
            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            // Log cleanup statistics
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    fn shared_store() -> (Arc<RwLock<CacheStore<String>>>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(0));
        let store = CacheStore::with_clock(300, clock.clone());
        (Arc::new(RwLock::new(store)), clock)
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_removes_expired_entries() {
        let (cache, clock) = shared_store();
        cache
            .write()
            .await
            .set("expire_soon".to_string(), "value".to_string(), Some(1));
        cache
            .write()
            .await
            .set("long_lived".to_string(), "value".to_string(), Some(3600));

        // Spawn cleanup task with 1 second interval
        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Let the entry expire, then wait for one sweep
        clock.advance_secs(2);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let guard = cache.read().await;
            assert_eq!(guard.len(), 1, "Expired entry should have been swept");
            assert_eq!(guard.stats().expired, 1);
        }

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_preserves_valid_entries() {
        let (cache, _clock) = shared_store();
        cache
            .write()
            .await
            .set("long_lived".to_string(), "value".to_string(), Some(3600));

        let handle = spawn_cleanup_task(cache.clone(), 1);
        tokio::time::sleep(Duration::from_millis(3500)).await;

        assert_eq!(
            cache.write().await.get("long_lived").as_deref(),
            Some("value"),
            "Valid entry should not be removed"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let (cache, _clock) = shared_store();

        let handle = spawn_cleanup_task(cache, 1);

        // Abort immediately
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
