//! HTTP mapping for domain errors.
//!
//! Validation failures are returned verbatim with 400. Anything else
//! is logged and replaced with a generic 500 body so no internal
//! detail reaches the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::FaqError;
use crate::core::types::ErrorResponse;

/// Body returned for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl FaqError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        if self.is_bad_request() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for FaqError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error = if self.is_bad_request() {
            self.message()
        } else {
            tracing::error!(error = %self, "Search error");
            INTERNAL_ERROR_MESSAGE.to_string()
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
