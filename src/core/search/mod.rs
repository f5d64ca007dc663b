//! Keyword search over the FAQ corpus.
//!
//! - **scorer**: per-document relevance score
//! - **snippet**: display excerpt around the query phrase
//! - **summary**: one-sentence synthesis of the top results
//! - **service**: validation, ranking and response assembly

pub mod scorer;
pub mod snippet;
pub mod summary;

mod service;

pub use scorer::score;
pub use service::{SearchService, MAX_RESULTS};
pub use snippet::{extract_snippet, extract_snippet_with, SnippetOptions};
pub use summary::{generate_summary, NO_MATCHES_SUMMARY};
