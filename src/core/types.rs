//! Core data types for the FAQ search service.
//!
//! This module defines the documents held by the store, the
//! per-request scored view of them, and the request/response bodies
//! exchanged over the API.

use serde::{Deserialize, Serialize};

/// A single FAQ entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique, stable identifier
    pub id: String,

    /// Question title
    pub title: String,

    /// Answer text
    pub body: String,
}

/// A document scored against one query
///
/// Lives only for the duration of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredDocument<'a> {
    pub document: &'a Document,

    /// Keyword relevance (0 = not relevant)
    pub score: u64,

    /// Display excerpt of the body
    pub snippet: String,
}

/// Public search hit: the document plus its snippet, without the score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub body: String,
    pub snippet: String,
}

impl From<&ScoredDocument<'_>> for SearchResult {
    fn from(scored: &ScoredDocument<'_>) -> Self {
        Self {
            id: scored.document.id.clone(),
            title: scored.document.title.clone(),
            body: scored.document.body.clone(),
            snippet: scored.snippet.clone(),
        }
    }
}

/// Response from a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Top hits, best first
    pub results: Vec<SearchResult>,

    /// Number of results returned
    pub count: usize,

    /// One-sentence synthesis of the results
    pub summary: String,

    /// Ids of the results, in result order
    pub sources: Vec<String>,

    /// The trimmed query
    pub query: String,
}

/// Error body returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Number of documents loaded
    pub documents: usize,
}
