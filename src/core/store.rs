//! Read-only FAQ document store.
//!
//! The store is built once at startup, either from the corpus bundled
//! into the binary or from a JSON file, and never changes afterwards.
//! Share it behind an `Arc`; no locking is needed.

use crate::core::error::{FaqError, Result};
use crate::core::types::Document;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Corpus compiled into the binary
const BUNDLED_CORPUS: &str = include_str!("../../data/faqs.json");

/// Immutable, ordered collection of FAQ documents
///
/// Document order is significant: ties in search ranking keep the
/// order documents appear in the store.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Build a store from documents, validating their ids
    pub fn new(documents: Vec<Document>) -> Result<Self> {
        Self::validate_ids(&documents)?;
        Ok(Self { documents })
    }

    fn validate_ids(documents: &[Document]) -> Result<()> {
        let mut seen = HashSet::with_capacity(documents.len());
        for doc in documents {
            if doc.id.trim().is_empty() {
                return Err(FaqError::StoreError(format!(
                    "Document with title {:?} has an empty id",
                    doc.title
                )));
            }
            if !seen.insert(doc.id.as_str()) {
                return Err(FaqError::StoreError(format!(
                    "Duplicate document id: {}",
                    doc.id
                )));
            }
        }
        Ok(())
    }

    /// Parse a JSON array of `{id, title, body}` objects
    pub fn from_json(json: &str) -> Result<Self> {
        let documents: Vec<Document> = serde_json::from_str(json)?;
        Self::new(documents)
    }

    /// Load documents from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading corpus from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// The corpus shipped with the service
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CORPUS)
    }

    /// Load from `path` when given, otherwise use the bundled corpus
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let store = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::bundled()?,
        };
        tracing::info!("Loaded {} FAQ documents", store.len());
        Ok(store)
    }

    /// All documents, in store order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Look up a document by id
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
