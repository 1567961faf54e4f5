//! Read-through price cache.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::catalog::PriceCatalog;
use super::chain::PriceKey;
use super::fetcher::PriceFetcher;
use crate::cache::{CacheStats, CacheStore, Clock, SystemClock};
use crate::error::{PriceError, Result};

/// Six hours.
pub const DEFAULT_PRICE_TTL: u64 = 6 * 60 * 60;

/// Reported in `source` when the catalog came from the cache.
pub const SOURCE_CACHE: &str = "price-cache";
/// Reported in `source` when the catalog was fetched for this request.
pub const SOURCE_LIVE: &str = "live";

// == Price Lookup ==
/// A catalog annotated with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceLookup {
    #[serde(flatten)]
    pub catalog: PriceCatalog,
    pub cached: bool,
    pub source: &'static str,
}

// == Price Cache ==
/// TTL cache of price catalogs keyed by canonical chain and store id.
///
/// Concurrent misses on the same key are not coalesced: each one fetches and
/// the last write wins.
#[derive(Debug, Clone)]
pub struct PriceCache {
    store: Arc<RwLock<CacheStore<PriceCatalog>>>,
    ttl: u64,
}

impl PriceCache {
    pub fn new(ttl: u64) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::with_clock(ttl, clock))),
            ttl,
        }
    }

    /// Shared handle to the underlying store, used by the expiry sweep.
    pub fn store_handle(&self) -> Arc<RwLock<CacheStore<PriceCatalog>>> {
        Arc::clone(&self.store)
    }

    /// TTL applied by [`PriceCache::get_or_fetch_default`].
    pub fn ttl(&self) -> u64 {
        self.ttl
    }

    // == Lookup ==
    /// Returns the cached catalog for a store if one is live. Never fetches.
    pub async fn lookup(&self, chain: &str, store_id: &str) -> Result<Option<PriceCatalog>> {
        let key = PriceKey::new(chain, store_id)?;
        Ok(self.lookup_key(&key).await)
    }

    async fn lookup_key(&self, key: &PriceKey) -> Option<PriceCatalog> {
        // Write lock: reads update hit/miss counters and drop expired entries
        let mut store = self.store.write().await;
        store.get(&key.as_cache_key())
    }

    // == Store ==
    /// Inserts or replaces the catalog for a store, live for `ttl_seconds`.
    pub async fn store(
        &self,
        chain: &str,
        store_id: &str,
        catalog: PriceCatalog,
        ttl_seconds: u64,
    ) -> Result<()> {
        let key = PriceKey::new(chain, store_id)?;
        self.store_key(&key, catalog, ttl_seconds).await;
        Ok(())
    }

    async fn store_key(&self, key: &PriceKey, catalog: PriceCatalog, ttl_seconds: u64) {
        let mut store = self.store.write().await;
        store.set(key.as_cache_key(), catalog, Some(ttl_seconds));
    }

    // == Get Or Fetch ==
    /// Serves from cache, or fetches, caches and serves on a miss.
    ///
    /// Unsupported chains fail before the cache or the fetcher are touched.
    /// A fetch that yields nothing usable fails with `FetchFailed` and leaves
    /// the cache unchanged.
    pub async fn get_or_fetch<F>(
        &self,
        chain: &str,
        store_id: &str,
        fetcher: &F,
        ttl_seconds: u64,
    ) -> Result<PriceLookup>
    where
        F: PriceFetcher + ?Sized,
    {
        let key = PriceKey::new(chain, store_id)?;

        if let Some(catalog) = self.lookup_key(&key).await {
            info!("Cache hit: {}", key.as_cache_key());
            return Ok(PriceLookup {
                catalog,
                cached: true,
                source: SOURCE_CACHE,
            });
        }

        info!("Cache miss: {}", key.as_cache_key());

        let fetched = fetcher.fetch(key.chain, &key.store_id).await;
        let catalog = match fetched {
            Some(catalog) if catalog.is_usable() => catalog,
            _ => {
                warn!("Fetch failed for {}", key);
                return Err(PriceError::FetchFailed {
                    chain: key.chain.id().to_string(),
                    store_id: key.store_id,
                });
            }
        };

        self.store_key(&key, catalog.clone(), ttl_seconds).await;

        Ok(PriceLookup {
            catalog,
            cached: false,
            source: SOURCE_LIVE,
        })
    }

    /// [`PriceCache::get_or_fetch`] with the cache's configured TTL.
    pub async fn get_or_fetch_default<F>(
        &self,
        chain: &str,
        store_id: &str,
        fetcher: &F,
    ) -> Result<PriceLookup>
    where
        F: PriceFetcher + ?Sized,
    {
        self.get_or_fetch(chain, store_id, fetcher, self.ttl).await
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Drops every cached catalog.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }
}
