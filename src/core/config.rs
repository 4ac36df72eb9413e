//! Configuration management for pagesplit.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{PagesplitError, Result};
use crate::core::splitter::SplitterConfig;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when no other
/// location applies
pub const LOCAL_CONFIG_FILE: &str = "pagesplit.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub splitter: SplitterConfig,
    #[serde(default)]
    pub indexing: IndexingConfig,
}

/// Document discovery and section metadata
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Category stamped on every section
    #[serde(default = "default_category")]
    pub category: String,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// Documents split in parallel
    #[serde(default = "default_max_concurrent_documents")]
    pub max_concurrent_documents: usize,
}

fn default_category() -> String {
    "default".to_string()
}

fn default_include_patterns() -> Vec<String> {
    ["*.txt", "*.md", "*.markdown", "*.html", "*.htm", "*.pages.json"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn default_exclude_patterns() -> Vec<String> {
    ["**/.git/**", "**/node_modules/**", "**/target/**"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn default_max_file_size() -> usize {
    10
}

fn default_max_concurrent_documents() -> usize {
    4
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
            max_file_size_mb: default_max_file_size(),
            max_concurrent_documents: default_max_concurrent_documents(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            PagesplitError::ConfigError(format!("Failed to read config file {path:?}: {e}"))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// File lookup order:
    /// 1. `PAGESPLIT_CONFIG` env var
    /// 2. XDG config file (~/.config/pagesplit/config.toml)
    /// 3. ./pagesplit.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("PAGESPLIT_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new(LOCAL_CONFIG_FILE).exists() {
                Self::from_file(LOCAL_CONFIG_FILE)?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn merge_env(&mut self) {
        // Splitter configuration
        override_from_env(
            "PAGESPLIT_MAX_SECTION_LENGTH",
            &mut self.splitter.max_section_length,
        );
        override_from_env(
            "PAGESPLIT_SENTENCE_SEARCH_LIMIT",
            &mut self.splitter.sentence_search_limit,
        );
        override_from_env(
            "PAGESPLIT_SECTION_OVERLAP",
            &mut self.splitter.section_overlap,
        );
        override_from_env(
            "PAGESPLIT_MIN_SECTION_LENGTH",
            &mut self.splitter.min_section_length,
        );
        if let Ok(value) = env::var("PAGESPLIT_HAS_IMAGES") {
            match parse_bool(&value) {
                Some(flag) => self.splitter.has_images = flag,
                None => tracing::warn!("Ignoring PAGESPLIT_HAS_IMAGES={:?}", value),
            }
        }

        // Indexing configuration
        if let Ok(category) = env::var("PAGESPLIT_CATEGORY") {
            self.indexing.category = category;
        }
        override_from_env(
            "PAGESPLIT_MAX_FILE_SIZE_MB",
            &mut self.indexing.max_file_size_mb,
        );
        override_from_env(
            "PAGESPLIT_MAX_CONCURRENT_DOCUMENTS",
            &mut self.indexing.max_concurrent_documents,
        );
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.splitter.validate()?;

        if self.indexing.max_file_size_mb == 0 {
            return Err(PagesplitError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.indexing.max_concurrent_documents == 0 {
            return Err(PagesplitError::ConfigError(
                "Max concurrent documents must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  Max section length: {} chars",
            self.splitter.max_section_length
        );
        tracing::info!(
            "  Sentence search limit: {} chars",
            self.splitter.sentence_search_limit
        );
        tracing::info!("  Section overlap: {} chars", self.splitter.section_overlap);
        tracing::info!(
            "  Min section length: {} chars",
            self.splitter.min_section_length
        );
        tracing::info!("  Preserve images: {}", self.splitter.has_images);
        tracing::info!("  Category: {}", self.indexing.category);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.indexing.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.indexing.exclude_patterns.len()
        );
        tracing::info!("  Max file size: {} MB", self.indexing.max_file_size_mb);
        tracing::info!(
            "  Max concurrent documents: {}",
            self.indexing.max_concurrent_documents
        );
    }
}

fn override_from_env(key: &str, target: &mut usize) {
    if let Ok(value) = env::var(key) {
        match value.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => tracing::warn!("Ignoring {}={:?}: not a number", key, value),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
