//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Provides the search and health endpoints via the Axum web
//! framework.

pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;

pub use handlers::*;

/// Build the application router
///
/// Routes:
/// - `GET /health`
/// - `POST /api/search`
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/search", post(search_handler))
        // No framework 413: every failure leaves as a JSON error
        .layer(DefaultBodyLimit::disable())
        .layer(from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
