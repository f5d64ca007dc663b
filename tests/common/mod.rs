// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test crates
#[allow(unused_imports)]
pub use fixtures::{sample_documents, write_corpus};
#[allow(unused_imports)]
pub use helpers::{
    bundled_services, create_test_app, create_test_services, post_search, read_json,
};
