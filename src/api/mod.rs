//! API Module
//!
//! HTTP handlers and routing for the price API.
//!
//! # Endpoints
//! - `GET /` - API description
//! - `/prices/:chain/:store_id` - Store price catalog
//! - `/product/:chain/:barcode` - Product lookup by barcode
//! - `GET /stats` - Price cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
