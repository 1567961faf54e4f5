//! Request/response types and the network seam for the asset cache.

use async_trait::async_trait;
use http::{Method, StatusCode};
use thiserror::Error;

// == Asset Request ==
/// The identity a response is cached under: method plus URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRequest {
    pub method: Method,
    pub url: String,
}

impl AssetRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
        }
    }

    /// Only GET responses are written to a store.
    pub fn is_cacheable(&self) -> bool {
        self.method == Method::GET
    }
}

// == Asset Response ==
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl AssetResponse {
    pub fn ok(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some(content_type.into()),
            body: body.into(),
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

// == Network ==
/// Transport-level failure: the request never produced a response.
///
/// An HTTP error status is a successful fetch, not a `NetworkError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct NetworkError(pub String);

/// Live fetch path for assets.
#[async_trait]
pub trait Network: Send + Sync {
    async fn fetch(&self, request: &AssetRequest) -> Result<AssetResponse, NetworkError>;
}
