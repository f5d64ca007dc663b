//! Unified service container
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::{SearchService, SnippetOptions};
use crate::core::store::DocumentStore;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Read-only FAQ documents
    pub store: Arc<DocumentStore>,

    /// Search service over the store
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration, loading the configured corpus
    ///
    /// # Errors
    ///
    /// Fails if the corpus file cannot be read or is invalid.
    pub fn new(config: Config) -> Result<Self> {
        let store = DocumentStore::load(config.corpus.path.as_deref())?;
        Ok(Self::with_store(config, store))
    }

    /// Create services over an already loaded store
    pub fn with_store(config: Config, store: DocumentStore) -> Self {
        let store = Arc::new(store);

        let search = Arc::new(SearchService::new(
            Arc::clone(&store),
            SnippetOptions::from(&config.search),
        ));

        Self {
            store,
            search,
            config: Arc::new(config),
        }
    }
}
