//! Response models for the price API
//!
//! Price lookups serialize `PriceLookup` directly; everything else lives here.

pub mod responses;

// Re-export commonly used types
pub use responses::{api_index, HealthResponse, ProductResponse, StatsResponse};
