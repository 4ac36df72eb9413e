//! Unified service container for pagesplit
//!
//! Provides shared access to the configured splitter and builds
//! indexing pipelines from the same configuration.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::indexer::IndexingPipeline;
use crate::core::loader::{Document, PageSource, TextPageSource};
use crate::core::splitter::TextSplitter;
use crate::core::types::SplitChunk;
use std::path::Path;
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Validated splitter shared by every caller
    pub splitter: Arc<TextSplitter>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration, validating it once
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let splitter = Arc::new(TextSplitter::new(config.splitter.clone())?);

        Ok(Self {
            splitter,
            config: Arc::new(config),
        })
    }

    /// Create an IndexingPipeline from the indexing configuration
    pub fn create_pipeline(&self) -> Result<IndexingPipeline> {
        IndexingPipeline::new(self.splitter.as_ref().clone(), &self.config.indexing)
    }

    /// Load one document from disk and split it
    pub fn split_file(&self, path: &Path) -> Result<(Document, Vec<SplitChunk>)> {
        let document = TextPageSource.load(path)?;
        let chunks = self.splitter.split_pages(&document.pages);
        Ok((document, chunks))
    }
}
