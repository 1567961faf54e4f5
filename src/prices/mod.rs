//! Prices Module
//!
//! Chain resolution, price catalogs, fetchers and the read-through price cache.

mod catalog;
mod chain;
mod data;
mod fetcher;
mod service;

pub use catalog::{find_product, mock_prices, PriceCatalog, ProductRecord};
pub use chain::{Chain, PriceKey, MAX_STORE_ID_LENGTH};
pub use fetcher::{MockPriceFetcher, PriceFetcher};
pub use service::{PriceCache, PriceLookup, DEFAULT_PRICE_TTL, SOURCE_CACHE, SOURCE_LIVE};
