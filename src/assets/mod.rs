//! Assets Module
//!
//! Offline support for the static client: versioned stores pre-filled at
//! install, cleaned up at activation, and a network-first fetch path.

mod network;
mod storage;
mod worker;

pub use network::{AssetRequest, AssetResponse, Network, NetworkError};
pub use storage::CacheStorage;
pub use worker::{AssetCache, AssetManifest, WorkerState, DEFAULT_ASSET_VERSION, DEFAULT_MANIFEST};
