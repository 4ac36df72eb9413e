//! Error types and error handling for pagesplit.
//!
//! The splitter itself only fails at construction time. Everything
//! else in this enum belongs to the loading and indexing layers
//! around it.

use thiserror::Error;

/// Result type alias for pagesplit operations
pub type Result<T> = std::result::Result<T, PagesplitError>;

/// Main error type for pagesplit
#[derive(Error, Debug)]
pub enum PagesplitError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid page list: {0}")]
    InvalidPages(String),

    #[error("Indexing failed: {0}")]
    IndexingFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PagesplitError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, PagesplitError::InvalidPath(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            PagesplitError::ConfigError(_) | PagesplitError::InvalidPages(_)
        )
    }
}
