//! Search command - query the FAQ corpus

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SearchResponse;
use clap::Args;

/// Topics suggested when a query matches nothing
const SUGGESTED_TOPICS: &str = "\"trust\", \"form\", \"test\", \"funnel\", or \"question\"";

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,

    /// Only show document IDs and titles (no snippets)
    #[arg(long)]
    pub titles_only: bool,
}

/// Execute the search command
///
/// JSON output is byte-for-byte the body `/api/search` would return.
pub fn execute(
    args: SearchArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = services.search.search(&args.query)?;

    match format {
        OutputFormat::Human => print_human(&response, args.titles_only),
        OutputFormat::Json => println!("{}", serde_json::to_string(&response)?),
    }

    Ok(())
}

fn print_human(response: &SearchResponse, titles_only: bool) {
    if response.results.is_empty() {
        println!(
            "No results found for '{}'",
            colors::label(&response.query)
        );
        println!(
            "{}",
            colors::dim(&format!("Try searching for {SUGGESTED_TOPICS}"))
        );
        return;
    }

    println!("{}\n", colors::summary(&response.summary));

    for (i, result) in response.results.iter().enumerate() {
        println!(
            "[{}] {} {}",
            colors::rank(&(i + 1).to_string()),
            colors::title(&result.title),
            colors::doc_id(&format!("({})", result.id))
        );
        if !titles_only {
            println!("    {}", output::highlight(&result.snippet, &response.query));
        }
        println!();
    }

    println!(
        "{} result(s)",
        colors::number(&response.count.to_string())
    );
}
