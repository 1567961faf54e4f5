//! Response DTOs for the price API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::{json, Value};

use crate::cache::CacheStats;
use crate::prices::{Chain, ProductRecord};

/// Response body for a found product (GET /product/{chain}/{barcode})
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub icon: String,
    pub unit: String,
    /// Chain-adjusted price, one decimal
    pub price: f64,
    /// The chain as requested, lowercased
    pub chain: String,
    pub found: bool,
}

impl ProductResponse {
    pub fn new(product: &ProductRecord, chain: &str) -> Self {
        let chain = chain.trim().to_lowercase();
        Self {
            barcode: product.barcode.to_string(),
            name: product.name.to_string(),
            brand: product.brand.to_string(),
            icon: product.icon.to_string(),
            unit: product.unit.to_string(),
            price: product.price_for(Chain::resolve(&chain)),
            chain,
            found: true,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Entries removed by the expiry sweep
    pub expired: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expired: stats.expired,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// API description served at `/`.
pub fn api_index() -> Value {
    json!({
        "name": "Israeli Supermarket Prices API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Price lookups for Israeli supermarket chains with a 6 hour response cache",
        "endpoints": {
            "prices": {
                "method": "GET",
                "path": "/prices/{chain}/{storeId}",
                "description": "Get all prices for a specific store",
                "chains": Chain::supported(),
                "example": "/prices/shufersal/123"
            },
            "product": {
                "method": "GET",
                "path": "/product/{chain}/{barcode}",
                "description": "Get single product information by barcode"
            }
        },
        "limits": {
            "cache": "6 hours per store"
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prices::find_product;

    #[test]
    fn test_product_response_prices_by_chain() {
        let water = find_product("7290005678901").unwrap();

        let rami = ProductResponse::new(water, "Rami");
        assert_eq!(rami.chain, "rami");
        assert_eq!(rami.price, 4.4);

        let unknown = ProductResponse::new(water, "victory");
        assert_eq!(unknown.price, 4.9);
        assert!(unknown.found);
    }

    #[test]
    fn test_product_response_hebrew_chain_uses_multiplier() {
        let water = find_product("7290005678901").unwrap();

        let rami = ProductResponse::new(water, "רמי לוי");
        assert_eq!(rami.chain, "רמי לוי");
        assert_eq!(rami.price, 4.4);
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            expired: 3,
            total_entries: 10,
        };
        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.expired, 3);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_api_index_lists_chains() {
        let index = api_index();
        assert_eq!(index["endpoints"]["prices"]["chains"][0], "shufersal");
        assert_eq!(index["limits"]["cache"], "6 hours per store");
    }
}
