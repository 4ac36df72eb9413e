//! Config command - show the effective configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also list include/exclude patterns
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    #[serde(flatten)]
    pub config: Config,
}

/// Execute the show-config command
pub fn execute(
    args: ConfigArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse {
        config_file: XdgDirs::new().config_file().to_string_lossy().into_owned(),
        config: services.config.as_ref().clone(),
    };

    match format {
        OutputFormat::Human => print_human(&response, args.all),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}

fn print_human(response: &ConfigResponse, all: bool) {
    let splitter = &response.config.splitter;
    let indexing = &response.config.indexing;

    println!("{}", colors::label("Configuration:"));
    println!("  config_file: {}", colors::file_path(&response.config_file));
    println!("  splitter:");
    println!("    max_section_length: {}", splitter.max_section_length);
    println!("    sentence_search_limit: {}", splitter.sentence_search_limit);
    println!("    section_overlap: {}", splitter.section_overlap);
    println!("    min_section_length: {}", splitter.min_section_length);
    println!("    has_images: {}", splitter.has_images);
    println!("  indexing:");
    println!("    category: {}", indexing.category);
    println!("    max_file_size_mb: {}", indexing.max_file_size_mb);
    println!(
        "    max_concurrent_documents: {}",
        indexing.max_concurrent_documents
    );
    if all {
        println!("    include_patterns: {:?}", indexing.include_patterns);
        println!("    exclude_patterns: {:?}", indexing.exclude_patterns);
    } else {
        println!(
            "    {}",
            colors::dim(&format!(
                "{} include / {} exclude patterns (use --all to list)",
                indexing.include_patterns.len(),
                indexing.exclude_patterns.len()
            ))
        );
    }
}
