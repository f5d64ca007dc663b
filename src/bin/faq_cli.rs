//! FAQ CLI - command-line interface for FAQ search
//!
//! Runs searches against the FAQ corpus without starting the HTTP
//! server. Useful for scripting and for checking a corpus file.
//!
//! # Examples
//!
//! ```bash
//! # Search
//! faq search "trust badges"
//!
//! # Same body the HTTP endpoint returns
//! faq search "trust badges" --format json
//!
//! # Inspect the corpus
//! faq list-documents
//! ```

use clap::Parser;
use faq_search::cli::{output, run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
