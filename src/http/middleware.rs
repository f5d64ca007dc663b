//! Request logging for the FAQ search API

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Log every request once it has been answered
///
/// 2xx and 3xx log at INFO, rejected queries (4xx) at WARN and
/// internal failures (5xx) at ERROR.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(%method, %path, status, duration_ms, "Request failed");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, %path, status, duration_ms, "Request rejected");
    } else {
        tracing::info!(%method, %path, status, duration_ms, "Request completed");
    }

    response
}
