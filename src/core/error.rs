//! Error types and error handling for the FAQ search service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific handling (HTTP status codes and
//! response bodies) lives in the respective adapter modules.

use thiserror::Error;

/// Message returned to clients when the search query is missing,
/// not a string, or blank after trimming.
pub const QUERY_REQUIRED_MESSAGE: &str = "Query is required and must be a non-empty string";

/// Result type alias for FAQ search operations
pub type Result<T> = std::result::Result<T, FaqError>;

/// Main error type for the FAQ search service
#[derive(Error, Debug)]
pub enum FaqError {
    /// User-correctable query problem. The message is shown verbatim.
    #[error("{0}")]
    InvalidQuery(String),

    /// Request body is structured data but unusable (e.g. JSON `null`)
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Document store error: {0}")]
    StoreError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl FaqError {
    /// Validation error for a missing or blank query
    pub fn query_required() -> Self {
        FaqError::InvalidQuery(QUERY_REQUIRED_MESSAGE.to_string())
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    ///
    /// Everything else is an internal failure and must not leak
    /// details to clients.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, FaqError::InvalidQuery(_))
    }
}
