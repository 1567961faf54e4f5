//! Price sources sitting behind the cache.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tracing::debug;

use super::catalog::{mock_prices, PriceCatalog};
use super::chain::Chain;

// == Fetcher Trait ==
/// Upstream source of price catalogs.
///
/// `None` means the source had nothing usable for the store; the cache never
/// stores that outcome.
#[async_trait]
pub trait PriceFetcher: Send + Sync {
    async fn fetch(&self, chain: Chain, store_id: &str) -> Option<PriceCatalog>;
}

// == Mock Fetcher ==
/// Serves the built-in static price tables for every store.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockPriceFetcher;

#[async_trait]
impl PriceFetcher for MockPriceFetcher {
    async fn fetch(&self, chain: Chain, store_id: &str) -> Option<PriceCatalog> {
        debug!("Fetching {} prices for store {}", chain, store_id);

        let (table, note) = mock_prices(chain);
        let prices: BTreeMap<String, f64> = table
            .iter()
            .map(|(item, price)| (item.to_string(), *price))
            .collect();

        Some(PriceCatalog::new(chain, store_id, prices).with_note(note))
    }
}
