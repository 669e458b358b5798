//! API Routes
//!
//! Configures the Axum router with all auction server endpoints.

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::context::attach_request_context;
use super::handlers::{
    create_auction_handler, get_auction_handler, health_handler, list_auctions_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - Request context: per-request cancellation token
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route(
            "/auction",
            get(list_auctions_handler).post(create_auction_handler),
        )
        .route("/auction/:auction_id", get(get_auction_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(middleware::from_fn(attach_request_context))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
