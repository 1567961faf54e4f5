//! API Handlers
//!
//! HTTP request handlers for each price API endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::error::{PriceError, Result};
use crate::models::{api_index, HealthResponse, ProductResponse, StatsResponse};
use crate::prices::{find_product, MockPriceFetcher, PriceCache, PriceFetcher, PriceLookup};

const PRICES_USAGE: &str = "/prices/{chain}/{storeId}";
const PRODUCT_USAGE: &str = "/product/{chain}/{barcode}";

/// Application state shared across all handlers.
///
/// The cache and the fetcher are injected so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub prices: PriceCache,
    pub fetcher: Arc<dyn PriceFetcher>,
}

impl AppState {
    pub fn new(prices: PriceCache, fetcher: Arc<dyn PriceFetcher>) -> Self {
        Self { prices, fetcher }
    }

    /// Creates a new AppState from configuration, serving the mock tables.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(PriceCache::new(config.price_ttl), Arc::new(MockPriceFetcher))
    }
}

/// Handler for GET /
pub async fn index_handler() -> Json<Value> {
    Json(api_index())
}

/// Splits the path tail into its first two non-empty segments.
///
/// Empty segments are skipped, so `/prices//rami/1/` reads as `rami/1`;
/// segments past the second are ignored.
fn leading_segments(tail: Option<Path<String>>) -> Option<(String, String)> {
    let Path(tail) = tail?;
    let mut segments = tail.split('/').filter(|segment| !segment.is_empty());
    let first = segments.next()?.to_string();
    let second = segments.next()?.to_string();
    Some((first, second))
}

/// Handler for /prices/{chain}/{storeId}
///
/// Serves the store's catalog from cache or fetches it on a miss. Any
/// method is accepted; a path without both segments is a 400.
pub async fn prices_handler(
    State(state): State<AppState>,
    tail: Option<Path<String>>,
) -> Result<Json<PriceLookup>> {
    let (chain, store_id) = leading_segments(tail).ok_or(PriceError::InvalidPath {
        usage: PRICES_USAGE,
    })?;

    let lookup = state
        .prices
        .get_or_fetch_default(&chain, &store_id, state.fetcher.as_ref())
        .await?;

    Ok(Json(lookup))
}

/// Handler for /product/{chain}/{barcode}
pub async fn product_handler(tail: Option<Path<String>>) -> Result<Json<ProductResponse>> {
    let (chain, barcode) = leading_segments(tail).ok_or(PriceError::InvalidPath {
        usage: PRODUCT_USAGE,
    })?;

    match find_product(&barcode) {
        Some(product) => Ok(Json(ProductResponse::new(product, &chain))),
        None => Err(PriceError::ProductNotFound {
            chain: chain.trim().to_lowercase(),
            barcode,
        }),
    }
}

/// Fallback for unknown routes.
pub async fn not_found_handler() -> PriceError {
    PriceError::RouteNotFound
}

/// Handler for GET /stats
///
/// Returns price cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.prices.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prices::DEFAULT_PRICE_TTL;

    fn test_state() -> AppState {
        AppState::new(PriceCache::new(DEFAULT_PRICE_TTL), Arc::new(MockPriceFetcher))
    }

    #[tokio::test]
    async fn test_prices_handler_miss_then_hit() {
        let state = test_state();
        let path = || Some(Path("shufersal/123".to_string()));

        let first = prices_handler(State(state.clone()), path()).await.unwrap();
        assert!(!first.cached);

        let second = prices_handler(State(state.clone()), path()).await.unwrap();
        assert!(second.cached);
        assert_eq!(second.catalog.store_id, "123");
    }

    #[tokio::test]
    async fn test_prices_handler_unsupported_chain() {
        let result = prices_handler(
            State(test_state()),
            Some(Path("victory/1".to_string())),
        )
        .await;

        assert!(matches!(result, Err(PriceError::UnsupportedChain { .. })));
    }

    #[tokio::test]
    async fn test_product_handler_not_found() {
        let result = product_handler(Some(Path("Shufersal/123".to_string()))).await;

        assert_eq!(
            result.unwrap_err(),
            PriceError::ProductNotFound {
                chain: "shufersal".to_string(),
                barcode: "123".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_prices_handler_needs_two_segments() {
        for tail in [None, Some(Path("rami".to_string())), Some(Path("rami//".to_string()))] {
            let result = prices_handler(State(test_state()), tail).await;
            assert_eq!(
                result.unwrap_err(),
                PriceError::InvalidPath {
                    usage: PRICES_USAGE
                }
            );
        }
    }

    #[test]
    fn test_leading_segments_skips_empty_and_extra() {
        assert_eq!(
            leading_segments(Some(Path("/rami//1/extra".to_string()))),
            Some(("rami".to_string(), "1".to_string()))
        );
        assert_eq!(leading_segments(Some(Path("rami/".to_string()))), None);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(test_state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
