//! pagesplit - page-aware document splitting for search indexing
//!
//! Splits extracted document pages into bounded, overlapping
//! sections ready for embedding and search indexing. Cuts prefer
//! sentence ends, tables are never broken apart, and every section
//! knows the page it came from.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - splitter (boundary search, protected spans, page map)
//!   - loader (text and JSON page sources)
//!   - section (index records)
//!   - indexer (document walking, concurrent pipeline)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Key Features
//!
//! - UTF-8 safe splitting (character-based, never panics)
//! - Sentence-first boundary search with configurable reach
//! - Table and image marker preservation
//! - Deterministic output, reentrant splitter

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{PagesplitError, Result};
pub use core::services::Services;
pub use core::splitter::{SplitterConfig, TextSplitter};
pub use core::types::*;
