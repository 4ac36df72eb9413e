//! CLI adapter for pagesplit
//!
//! Provides the command-line interface over the splitter and the
//! indexing pipeline. Depends on `core/`; nothing in `core/` depends
//! on it.
//!
//! # Architecture
//!
//! ```text
//! +------------------+      +------------------+
//! |      cli/        | ---> |     core/        |
//! | (clap adapter)   |      |  (domain logic)  |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "pagesplit=warn";

/// Log filter used with `--verbose`
const VERBOSE_LOG_FILTER: &str = "pagesplit=debug";

/// pagesplit - page-aware document splitting
///
/// Splits extracted document pages into bounded, overlapping sections
/// for embedding and search indexing. Sections end at sentence
/// boundaries where possible and never break a table apart.
#[derive(Parser, Debug)]
#[command(name = "pagesplit")]
#[command(version)]
#[command(about = "Page-aware document splitter for search indexing", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Log line format (logs go to stderr)
    #[arg(long, global = true, default_value = "plain")]
    pub log_format: LogFormat,

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

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Plain text lines (default)
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split one document and print its sections
    Split(commands::SplitArgs),

    /// Split a file or directory into index-ready sections (JSON Lines)
    Index(commands::IndexArgs),

    /// Show the effective configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  pagesplit completions bash > ~/.local/share/bash-completion/completions/pagesplit
    ///   zsh:   pagesplit completions zsh > ~/.zfunc/_pagesplit
    ///   fish:  pagesplit completions fish > ~/.config/fish/completions/pagesplit.fish
    Completions(commands::CompletionsArgs),
}

/// Install the tracing subscriber. Logs always go to stderr so that
/// stdout stays machine readable.
pub fn init_logging(verbose: bool, log_format: LogFormat) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into());

    let registry = tracing_subscriber::registry().with(filter);
    // A subscriber may already be installed (tests run several CLIs
    // in one process); keep the first one
    let _ = match log_format {
        LogFormat::Plain => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;

    init_logging(cli.verbose, cli.log_format);

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let mut config = Config::load()?;

    // Per-command overrides sit above env vars and files
    match &cli.command {
        Commands::Split(args) => args.splitter.apply(&mut config),
        Commands::Index(args) => args.apply(&mut config),
        Commands::ShowConfig(_) | Commands::Completions(_) => {}
    }

    let services = Services::new(config)?;
    services.config.log_config();

    match cli.command {
        Commands::Split(args) => commands::split::execute(args, &services, cli.format),
        Commands::Index(args) => commands::index::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
