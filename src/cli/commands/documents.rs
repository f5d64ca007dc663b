//! List-documents command - show the loaded corpus

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;

/// Arguments for the list-documents command
#[derive(Args, Debug)]
pub struct DocumentsArgs {
    /// Include the full answer body
    #[arg(long)]
    pub bodies: bool,
}

/// Document listing entry
#[derive(Debug, Serialize)]
pub struct DocumentItem {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Execute the list-documents command
pub fn execute(
    args: DocumentsArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let items: Vec<DocumentItem> = services
        .store
        .documents()
        .iter()
        .map(|d| DocumentItem {
            id: d.id.clone(),
            title: d.title.clone(),
            body: args.bodies.then(|| d.body.clone()),
        })
        .collect();

    match format {
        OutputFormat::Human => {
            output::print_header(&format!("{} document(s):", items.len()));
            for item in &items {
                println!(
                    "  {}  {}",
                    colors::doc_id(&item.id),
                    colors::title(&item.title)
                );
                if let Some(body) = &item.body {
                    println!("      {}", colors::dim(body));
                }
            }
        }
        OutputFormat::Json => output::print_json(&items)?,
    }

    Ok(())
}
