//! API Routes
//!
//! Configures the Axum router with all price API endpoints.

use axum::{
    http::{header, Method},
    routing::{any, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, index_handler, not_found_handler, prices_handler, product_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - API description
/// - `/prices/:chain/:store_id` - Store price catalog (cached), any method
/// - `/product/:chain/:barcode` - Single product by barcode, any method
/// - `GET /stats` - Price cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: any origin, answers preflight requests
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(index_handler))
        // Catch-alls never match an empty tail, so the bare and
        // trailing-slash forms get their own routes.
        .route("/prices", any(prices_handler))
        .route("/prices/", any(prices_handler))
        .route("/prices/*tail", any(prices_handler))
        .route("/product", any(product_handler))
        .route("/product/", any(product_handler))
        .route("/product/*tail", any(product_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prices::{MockPriceFetcher, PriceCache};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(PriceCache::new(60), Arc::new(MockPriceFetcher));
        create_router(state)
    }

    async fn status_of(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_endpoint() {
        assert_eq!(status_of("/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_prices_endpoint() {
        assert_eq!(status_of("/prices/rami/1").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_prices_missing_store() {
        assert_eq!(status_of("/prices/rami").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_prices_trailing_slash() {
        assert_eq!(status_of("/prices/").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/prices/rami/").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/prices/rami/1/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_prices_extra_segments_ignored() {
        assert_eq!(status_of("/prices/rami/1/extra").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        assert_eq!(status_of("/nowhere").await, StatusCode::NOT_FOUND);
    }
}
