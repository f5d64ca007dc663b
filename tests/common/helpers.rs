// Test helper functions

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
    response::Response,
    Router,
};
use faq_search::{http, Config, DocumentStore, Services};
use serde_json::Value;

use super::fixtures::sample_documents;

/// Services over the sample corpus with default configuration
#[allow(dead_code)]
pub fn create_test_services() -> Services {
    let store = DocumentStore::new(sample_documents()).expect("Invalid sample corpus");
    Services::with_store(Config::default(), store)
}

/// Services over the bundled corpus
#[allow(dead_code)]
pub fn bundled_services() -> Services {
    let store = DocumentStore::bundled().expect("Invalid bundled corpus");
    Services::with_store(Config::default(), store)
}

/// Router over the bundled corpus
#[allow(dead_code)]
pub fn create_test_app() -> Router {
    http::router(Arc::new(bundled_services()))
}

/// POST a raw body to /api/search
#[allow(dead_code)]
pub fn post_search(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("Failed to build request")
}

/// Collect a response body and parse it as JSON
#[allow(dead_code)]
pub async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
