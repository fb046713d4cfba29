//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::routing::{any, get};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{customers, health};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// - `GET /health` - Health check
/// - `/check_customer` (any method) - Check whether the customer is missing from Asaas
/// - `/create_customer` (any method) - Register the customer unless it exists
pub fn create_router(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout();

    let state = Arc::new(state);

    Router::new()
        .route("/health", get(health::health))
        .route("/check_customer", any(customers::check_customer))
        .route("/create_customer", any(customers::create_customer))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
