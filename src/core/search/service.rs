//! Search orchestration.
//!
//! This module provides the SearchService, which turns a raw query into
//! a complete response: validate, score every document, rank, attach
//! snippets and summarize.

use crate::core::error::{FaqError, Result};
use crate::core::search::scorer::score;
use crate::core::search::snippet::{extract_snippet_with, SnippetOptions};
use crate::core::search::summary::{generate_summary, NO_MATCHES_SUMMARY};
use crate::core::store::DocumentStore;
use crate::core::types::{Document, ScoredDocument, SearchResponse, SearchResult};
use std::sync::Arc;
use std::time::Instant;

/// Most results returned for one query
pub const MAX_RESULTS: usize = 3;

/// Keyword search over the document store
///
/// Holds no per-request state; one instance serves all requests.
pub struct SearchService {
    store: Arc<DocumentStore>,
    snippet: SnippetOptions,
}

impl SearchService {
    /// Create a new search service
    pub fn new(store: Arc<DocumentStore>, snippet: SnippetOptions) -> Self {
        Self { store, snippet }
    }

    /// The store this service searches
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Execute a search query
    ///
    /// # Errors
    ///
    /// - `InvalidQuery`: Query is empty or whitespace only
    pub fn search(&self, query: &str) -> Result<SearchResponse> {
        let start = Instant::now();

        let query = query.trim();
        if query.is_empty() {
            return Err(FaqError::query_required());
        }

        let ranked = self.rank(query);
        let summary = generate_summary(&ranked);

        let results: Vec<SearchResult> = ranked.iter().map(SearchResult::from).collect();
        let sources = ranked.iter().map(|r| r.document.id.clone()).collect();

        tracing::debug!(
            query = %query,
            matches = results.len(),
            duration_us = start.elapsed().as_micros() as u64,
            "Search completed"
        );

        Ok(SearchResponse {
            count: results.len(),
            results,
            summary: if summary.is_empty() {
                NO_MATCHES_SUMMARY.to_string()
            } else {
                summary
            },
            sources,
            query: query.to_string(),
        })
    }

    /// Top documents for `query`, best first
    ///
    /// Only documents with a positive score are kept. Equal scores keep
    /// store order. At most [`MAX_RESULTS`] are returned, each with its
    /// snippet attached.
    pub fn rank(&self, query: &str) -> Vec<ScoredDocument<'_>> {
        let mut hits: Vec<(u64, &Document)> = self
            .store
            .documents()
            .iter()
            .map(|document| (score(query, document), document))
            .filter(|(score, _)| *score > 0)
            .collect();

        // Stable sort: ties stay in store order
        hits.sort_by(|a, b| b.0.cmp(&a.0));
        hits.truncate(MAX_RESULTS);

        hits.into_iter()
            .map(|(score, document)| ScoredDocument {
                document,
                score,
                snippet: extract_snippet_with(&document.body, query, &self.snippet),
            })
            .collect()
    }
}
