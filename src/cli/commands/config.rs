//! Config command - show current configuration

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the config file is looked up
    #[arg(long)]
    pub paths: bool,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  server:");
            println!("    host: {}", config.server.host);
            println!("    port: {}", config.server.port);
            println!("  corpus:");
            match &config.corpus.path {
                Some(path) => println!("    path: {}", path.display()),
                None => println!("    path: (bundled)"),
            }
            println!("    documents: {}", services.store.len());
            println!("  search:");
            println!("    snippet_length: {}", config.search.snippet_length);
            println!("    context_before: {}", config.search.context_before);
            println!("    context_after: {}", config.search.context_after);

            if args.paths {
                let xdg = XdgDirs::new();
                println!("  config_file: {}", xdg.config_file().display());
            }
        }
        OutputFormat::Json => output::print_json(config)?,
    }

    Ok(())
}
