//! FAQ Search - keyword search over a fixed FAQ corpus
//!
//! Answers free-text queries with the top matching FAQ entries, each
//! with a snippet around the matched phrase, plus a one-sentence
//! summary of the results.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - store (read-only document corpus)
//!   - search (scoring, snippets, summaries, ranking)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, error mapping, middleware
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{FaqError, Result};
pub use crate::core::services::Services;
pub use crate::core::store::DocumentStore;
pub use crate::core::types::*;
