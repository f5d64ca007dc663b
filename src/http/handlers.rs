//! HTTP request handlers for the FAQ search API
//!
//! Implements handlers for the two endpoints: health and search.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use serde_json::Value;

use crate::core::error::{FaqError, Result};
use crate::core::services::Services;
use crate::core::types::*;

/// Health check handler
///
/// Returns server status, version and the size of the loaded corpus.
pub async fn health_handler(State(services): State<Arc<Services>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        documents: services.store.len(),
    })
}

/// Search handler
///
/// Reads `{ "query": string }` from the request body and returns the
/// top matching FAQ entries with snippets and a summary.
///
/// The body is parsed here rather than through the `Json` extractor so
/// that every failure maps onto the two documented error shapes.
///
/// # Errors
///
/// - `InvalidQuery` (400): `query` missing, not a string, or blank
/// - `SerdeError` / `MalformedRequest` (500): body is not usable JSON
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    body: Bytes,
) -> Result<Json<SearchResponse>> {
    let query = parse_query(&body)?;

    let response = services.search.search(&query)?;

    Ok(Json(response))
}

/// Extract a non-blank `query` string from a JSON request body
pub fn parse_query(body: &[u8]) -> Result<String> {
    let payload: Value = serde_json::from_slice(body)?;

    if payload.is_null() {
        return Err(FaqError::MalformedRequest(
            "request body is null".to_string(),
        ));
    }

    match payload.get("query").and_then(Value::as_str) {
        Some(query) if !query.trim().is_empty() => Ok(query.to_string()),
        _ => Err(FaqError::query_required()),
    }
}
