//! CLI test helpers
//!
//! Builders for command arguments with everything optional left unset.

use pagesplit::cli::commands::{IndexArgs, SplitArgs, SplitterArgs};
use std::path::Path;

pub fn split_args(file: &Path) -> SplitArgs {
    SplitArgs {
        file: file.to_path_buf(),
        splitter: SplitterArgs::default(),
        full: false,
    }
}

pub fn index_args(path: &Path) -> IndexArgs {
    IndexArgs {
        path: path.to_path_buf(),
        output: None,
        category: None,
        include: vec![],
        exclude: vec![],
        jobs: None,
        splitter: SplitterArgs::default(),
        quiet: true,
    }
}
