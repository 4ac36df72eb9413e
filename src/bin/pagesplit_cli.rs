//! pagesplit CLI - split extracted documents into search sections
//!
//! # Examples
//!
//! ```bash
//! # Inspect how one document is split
//! pagesplit split handbook.pdf.pages.json
//!
//! # Produce JSON Lines sections for a whole directory
//! pagesplit index ./extracted --category benefits -o sections.jsonl
//!
//! # Show the effective configuration
//! pagesplit show-config --all
//! ```

use clap::Parser;
use pagesplit::cli::{output, run, Cli};
use pagesplit::PagesplitError;

/// Exit code for usage and input errors
const EXIT_BAD_INPUT: i32 = 2;

/// Exit code when the input path does not exist
const EXIT_NOT_FOUND: i32 = 3;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        let code = match e.downcast_ref::<PagesplitError>() {
            Some(err) => {
                output::print_error(&err.message());
                if err.is_not_found() {
                    EXIT_NOT_FOUND
                } else if err.is_bad_request() {
                    EXIT_BAD_INPUT
                } else {
                    1
                }
            }
            None => {
                output::print_error(&e.to_string());
                1
            }
        };
        std::process::exit(code);
    }
}
