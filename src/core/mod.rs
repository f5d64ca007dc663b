//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **store**: Read-only FAQ document store
//! - **search**: Scoring, snippets, summaries and ranking
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod store;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{FaqError, Result};
pub use services::Services;
