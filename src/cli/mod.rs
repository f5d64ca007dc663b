//! CLI adapter for FAQ search
//!
//! Provides a command-line interface over the same search core the
//! HTTP server uses. This module is parallel to `http/` - both depend
//! on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// FAQ Search - keyword search over the FAQ knowledge base
///
/// Runs the same scoring, snippet and summary logic as the
/// `/api/search` endpoint, without starting a server.
#[derive(Parser, Debug)]
#[command(name = "faq")]
#[command(version)]
#[command(about = "Search the FAQ knowledge base", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Log search diagnostics to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the FAQ corpus
    Search(commands::SearchArgs),

    /// List the loaded FAQ documents
    #[command(name = "list-documents")]
    ListDocuments(commands::DocumentsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  faq completions bash > ~/.local/share/bash-completion/completions/faq
    ///   zsh:   faq completions zsh > ~/.zfunc/_faq
    ///   fish:  faq completions fish > ~/.config/fish/completions/faq.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("faq_search=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let config = Config::load()?;
    let services = Services::new(config)?;
    if services.store.is_empty() {
        output::print_warning("corpus has no documents; searches will return no results");
    }

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format),
        Commands::ListDocuments(args) => {
            commands::documents::execute(args, &services, cli.format)
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
