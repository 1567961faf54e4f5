//! Error types for the price service and the asset cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Price Error Enum ==
/// Failures of a price or product lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PriceError {
    /// Chain name does not resolve to any known chain
    #[error("Unsupported chain: {chain}")]
    UnsupportedChain {
        chain: String,
        supported: Vec<&'static str>,
    },

    /// The fetcher produced no usable catalog
    #[error("Failed to fetch prices for {chain}/{store_id}")]
    FetchFailed { chain: String, store_id: String },

    /// Store identifier is empty or too long
    #[error("Invalid store id: {0}")]
    InvalidStoreId(String),

    /// Request path is missing segments
    #[error("Invalid path, usage: {usage}")]
    InvalidPath { usage: &'static str },

    /// Barcode is not in the product catalogue
    #[error("Product not found: {barcode}")]
    ProductNotFound { chain: String, barcode: String },

    /// No route matched
    #[error("Not found")]
    RouteNotFound,
}

// == IntoResponse Implementation ==
impl IntoResponse for PriceError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            PriceError::UnsupportedChain { supported, .. } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Unsupported chain", "supported": supported }),
            ),
            PriceError::FetchFailed { chain, store_id } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to fetch prices", "chain": chain, "storeId": store_id }),
            ),
            PriceError::InvalidStoreId(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid store id", "message": msg }),
            ),
            PriceError::InvalidPath { usage } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid path", "usage": usage }),
            ),
            PriceError::ProductNotFound { chain, barcode } => (
                StatusCode::NOT_FOUND,
                json!({
                    "barcode": barcode,
                    "chain": chain,
                    "found": false,
                    "message": "Product not found in database"
                }),
            ),
            PriceError::RouteNotFound => (StatusCode::NOT_FOUND, json!({ "error": "Not found" })),
        };

        (status, Json(body)).into_response()
    }
}

// == Asset Error Enum ==
/// Failures of the network-first asset cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Network fetch failed and nothing was cached for the request
    #[error("Network unavailable for {url}: {reason}")]
    NetworkUnavailable { url: String, reason: String },

    /// A manifest resource could not be fetched; nothing was installed
    #[error("Install of {version} failed on {resource}: {reason}")]
    InstallFailed {
        version: String,
        resource: String,
        reason: String,
    },

    /// Activation requested for a version that was never installed
    #[error("Version not installed: {0}")]
    NotInstalled(String),
}

// == Result Type Alias ==
/// Convenience Result type for price lookups.
pub type Result<T> = std::result::Result<T, PriceError>;
