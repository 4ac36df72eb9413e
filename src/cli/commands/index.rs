//! Index command - split documents into index-ready sections
//!
//! Sections are written as JSON Lines, one `Section` per line, to
//! `--output` or stdout. The run summary goes to stdout when sections
//! go to a file, and to stderr otherwise.

use crate::cli::commands::SplitterArgs;
use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::error::PagesplitError;
use crate::core::services::Services;
use crate::core::types::Section;
use clap::Args;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the index command
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// File or directory to index
    pub path: PathBuf,

    /// Write sections to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Category stamped on every section
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Glob patterns to include (can be specified multiple times)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// Documents split in parallel
    #[arg(long, short = 'j')]
    pub jobs: Option<usize>,

    #[command(flatten)]
    pub splitter: SplitterArgs,

    /// Suppress the run summary
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl IndexArgs {
    /// Apply the given flags on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        self.splitter.apply(config);

        let indexing = &mut config.indexing;
        if let Some(category) = &self.category {
            indexing.category = category.clone();
        }
        if !self.include.is_empty() {
            indexing.include_patterns = self.include.clone();
        }
        if !self.exclude.is_empty() {
            indexing.exclude_patterns = self.exclude.clone();
        }
        if let Some(jobs) = self.jobs {
            indexing.max_concurrent_documents = jobs;
        }
    }
}

/// Indexing result response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub path: String,
    pub output: Option<String>,
    pub files_indexed: usize,
    pub files_skipped: usize,
    pub pages_read: usize,
    pub sections_created: usize,
    pub duration_secs: f64,
    pub indexed_at: String,
}

/// Execute the index command
pub async fn execute(
    args: IndexArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = args.path.canonicalize().map_err(|e| {
        PagesplitError::InvalidPath(format!(
            "'{}': {}. Make sure the path exists and is accessible.",
            args.path.display(),
            e
        ))
    })?;

    let pipeline = services.create_pipeline()?;
    let (sections, stats) = pipeline.index_path(&path).await?;

    match &args.output {
        Some(output) => {
            let file = File::create(output)
                .map_err(|e| format!("Cannot create '{}': {}", output.display(), e))?;
            write_sections(&sections, BufWriter::new(file))?;
        }
        None => write_sections(&sections, io::stdout().lock())?,
    }

    if args.quiet {
        return Ok(());
    }

    let response = IndexResponse {
        path: path.to_string_lossy().into_owned(),
        output: args
            .output
            .as_ref()
            .map(|o| o.to_string_lossy().into_owned()),
        files_indexed: stats.files_indexed,
        files_skipped: stats.files_skipped,
        pages_read: stats.pages_read,
        sections_created: stats.sections_created,
        duration_secs: stats.duration_ms as f64 / 1000.0,
        indexed_at: stats.indexed_at,
    };

    let summary = match format {
        OutputFormat::Human => human_summary(&response),
        OutputFormat::Json => serde_json::to_string_pretty(&response)?,
    };

    // Keep stdout clean for the JSON Lines stream
    if args.output.is_some() {
        println!("{summary}");
    } else {
        eprintln!("{summary}");
    }

    Ok(())
}

/// Write one JSON object per section
pub fn write_sections<W: Write>(sections: &[Section], mut out: W) -> io::Result<()> {
    for section in sections {
        serde_json::to_writer(&mut out, section)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

fn human_summary(response: &IndexResponse) -> String {
    let mut summary = format!(
        "{} {} documents ({} pages, {} sections) in {}",
        colors::success("Indexed"),
        colors::number(&response.files_indexed.to_string()),
        colors::number(&response.pages_read.to_string()),
        colors::number(&response.sections_created.to_string()),
        colors::number(&format_duration(response.duration_secs))
    );
    if response.files_skipped > 0 {
        summary.push_str(&format!(
            "\n{}: {} documents skipped (see log)",
            colors::warning("Warning"),
            response.files_skipped
        ));
    }
    if let Some(output) = &response.output {
        summary.push_str(&format!("\nSections written to {}", colors::file_path(output)));
    }
    summary
}
