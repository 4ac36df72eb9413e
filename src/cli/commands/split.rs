//! Split command - split one document and print its sections

use crate::cli::output::{colors, preview};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::types::SplitChunk;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Characters of section text shown per section in human output
const PREVIEW_CHARS: usize = 72;

/// Splitter settings that can be overridden per invocation
#[derive(Args, Debug, Default)]
pub struct SplitterArgs {
    /// Hard upper bound on section length, in characters
    #[arg(long)]
    pub max_section_length: Option<usize>,

    /// How far the boundary search may scan from its target
    #[arg(long)]
    pub sentence_search_limit: Option<usize>,

    /// Characters repeated at the start of the next section
    #[arg(long)]
    pub section_overlap: Option<usize>,

    /// Tails shorter than this are folded into the previous section if it has room
    #[arg(long)]
    pub min_section_length: Option<usize>,

    /// Keep image markers (<figure>, ![alt](src)) in one section
    #[arg(long)]
    pub has_images: bool,
}

impl SplitterArgs {
    /// Apply the given flags on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        let splitter = &mut config.splitter;
        if let Some(max) = self.max_section_length {
            splitter.max_section_length = max;
        }
        if let Some(limit) = self.sentence_search_limit {
            splitter.sentence_search_limit = limit;
        }
        if let Some(overlap) = self.section_overlap {
            splitter.section_overlap = overlap;
        }
        if let Some(min) = self.min_section_length {
            splitter.min_section_length = min;
        }
        if self.has_images {
            splitter.has_images = true;
        }
    }
}

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Text file (form feeds separate pages) or `.pages.json` page list
    pub file: PathBuf,

    #[command(flatten)]
    pub splitter: SplitterArgs,

    /// Print full section text instead of a preview
    #[arg(long)]
    pub full: bool,
}

/// Split result response
#[derive(Debug, Serialize)]
pub struct SplitResponse {
    pub file: String,
    pub pages: usize,
    pub sections: Vec<SplitChunk>,
}

/// Execute the split command
pub fn execute(
    args: SplitArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.is_file() {
        return Err(format!(
            "'{}' is not a file. Use `pagesplit index` for directories.",
            args.file.display()
        )
        .into());
    }

    let (document, chunks) = services.split_file(&args.file)?;

    let response = SplitResponse {
        file: document.name,
        pages: document.pages.len(),
        sections: chunks,
    };

    match format {
        OutputFormat::Human => print_human(&response, args.full),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}

fn print_human(response: &SplitResponse, full: bool) {
    println!(
        "{} {} ({} pages) into {} sections",
        colors::success("Split"),
        colors::file_path(&response.file),
        colors::number(&response.pages.to_string()),
        colors::number(&response.sections.len().to_string())
    );

    for (n, section) in response.sections.iter().enumerate() {
        println!();
        println!(
            "{} page {}, chars {}..{} ({} chars)",
            colors::label(&format!("[{n}]")),
            colors::number(&section.page_number.to_string()),
            section.start_offset,
            section.end_offset,
            colors::number(&section.char_len().to_string())
        );
        if full {
            println!("{}", section.text);
        } else {
            println!("  {}", colors::dim(&preview(&section.text, PREVIEW_CHARS)));
        }
    }
}
