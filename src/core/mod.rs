//! Core domain logic (interface-agnostic)
//!
//! This module contains everything that does not depend on how
//! pagesplit is driven (library call or CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **splitter**: Page-aware section splitting
//! - **loader**: Page sources (text files, JSON page lists)
//! - **section**: Index-ready section records
//! - **indexer**: Document discovery and the indexing pipeline
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod loader;
pub mod section;
pub mod services;
pub mod splitter;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{PagesplitError, Result};
pub use services::Services;
