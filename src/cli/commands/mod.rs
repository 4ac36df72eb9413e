//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command.

pub mod completions;
pub mod config;
pub mod index;
pub mod split;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use index::IndexArgs;
pub use split::{SplitArgs, SplitterArgs};
