//! Price Cache - supermarket price lookups behind a TTL cache
//!
//! Resolves chain/store identifiers to price catalogs, caches them for six
//! hours, and ships a network-first asset cache for the offline client.

pub mod api;
pub mod assets;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod prices;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{AssetError, PriceError};
pub use tasks::spawn_cleanup_task;
