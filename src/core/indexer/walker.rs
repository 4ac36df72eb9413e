//! Document discovery with pattern-based filtering.
//!
//! Accepts a single file or a directory tree, filters candidates
//! with glob patterns and a size cap, and returns them in a stable
//! sorted order. Unreadable entries are logged and skipped.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{PagesplitError, Result};

/// Finds the documents under a path
pub struct FileWalker {
    /// Patterns to include (e.g., "*.txt", "*.pages.json")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "**/drafts/**")
    exclude_patterns: Vec<Pattern>,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

impl FileWalker {
    /// Create a walker, failing on malformed glob patterns
    pub fn new(
        include_patterns: &[String],
        exclude_patterns: &[String],
        max_file_size_mb: usize,
    ) -> Result<Self> {
        Ok(Self {
            include_patterns: compile_patterns(include_patterns, "include")?,
            exclude_patterns: compile_patterns(exclude_patterns, "exclude")?,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Collect the documents at `root`.
    ///
    /// A file path is returned as-is when it passes the size cap;
    /// patterns only filter directory walks. Directory results are
    /// sorted so repeated runs see the same order.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let metadata = std::fs::metadata(root)
            .map_err(|e| PagesplitError::InvalidPath(format!("{}: {e}", root.display())))?;

        if metadata.is_file() {
            if metadata.len() > self.max_file_size_bytes {
                return Err(PagesplitError::InvalidPath(format!(
                    "{} exceeds the maximum file size ({} bytes)",
                    root.display(),
                    self.max_file_size_bytes
                )));
            }
            return Ok(vec![root.to_path_buf()]);
        }

        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.path() == root || self.should_descend(e))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && self.accepts(entry))
            .map(DirEntry::into_path)
            .collect();

        files.sort();
        Ok(files)
    }

    /// Hidden and excluded directories are pruned as a whole
    fn should_descend(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return true;
        }

        let path = entry.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            return false;
        }

        if self.exclude_patterns.iter().any(|p| p.matches_path(path)) {
            tracing::debug!("Skipping excluded directory: {:?}", path);
            return false;
        }

        true
    }

    fn accepts(&self, entry: &DirEntry) -> bool {
        let path = entry.path();

        if let Ok(metadata) = entry.metadata() {
            if metadata.len() > self.max_file_size_bytes {
                tracing::debug!("Skipping large file: {:?} ({} bytes)", path, metadata.len());
                return false;
            }
        }

        let Some(path_str) = path.to_str() else {
            return false;
        };
        let file_name = path.file_name().and_then(|f| f.to_str()).unwrap_or_default();

        // Include patterns match the full path or the bare file name
        let included = self.include_patterns.is_empty()
            || self
                .include_patterns
                .iter()
                .any(|p| p.matches(path_str) || p.matches(file_name));

        included
            && !self
                .exclude_patterns
                .iter()
                .any(|p| p.matches(path_str) || p.matches_path(path))
    }
}

fn compile_patterns(patterns: &[String], kind: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                PagesplitError::ConfigError(format!("Invalid {kind} pattern '{p}': {e}"))
            })
        })
        .collect()
}
