//! Indexing pipeline orchestration.
//!
//! Coordinates the end-to-end indexing workflow:
//! 1. Collect documents (single file or directory walk)
//! 2. Load each document's pages
//! 3. Split pages into sections on blocking worker tasks
//! 4. Reassemble the sections in walk order

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::core::config::IndexingConfig;
use crate::core::error::{PagesplitError, Result};
use crate::core::indexer::FileWalker;
use crate::core::loader::{PageSource, TextPageSource};
use crate::core::section::build_sections;
use crate::core::splitter::TextSplitter;
use crate::core::types::{IndexStats, Section};

/// Sections and page count for one successfully split document
#[derive(Debug)]
struct DocumentOutcome {
    pages: usize,
    sections: Vec<Section>,
}

/// Orchestrates the indexing pipeline
pub struct IndexingPipeline {
    walker: FileWalker,
    splitter: Arc<TextSplitter>,
    source: Arc<dyn PageSource>,
    category: String,
    max_concurrent_documents: usize,
}

impl IndexingPipeline {
    /// Create a pipeline reading documents with [`TextPageSource`]
    pub fn new(splitter: TextSplitter, indexing: &IndexingConfig) -> Result<Self> {
        let walker = FileWalker::new(
            &indexing.include_patterns,
            &indexing.exclude_patterns,
            indexing.max_file_size_mb,
        )?;

        Ok(Self {
            walker,
            splitter: Arc::new(splitter),
            source: Arc::new(TextPageSource),
            category: indexing.category.clone(),
            max_concurrent_documents: indexing.max_concurrent_documents.max(1),
        })
    }

    /// Replace the page source, e.g. with an upstream extractor
    pub fn with_source(mut self, source: Arc<dyn PageSource>) -> Self {
        self.source = source;
        self
    }

    /// Index a file or directory and return sections + stats
    ///
    /// Documents are split concurrently, at most
    /// `max_concurrent_documents` at a time, but sections come back
    /// grouped by document in walk order. Failures on individual
    /// files are logged and counted, never fatal.
    pub async fn index_path(&self, root: &Path) -> Result<(Vec<Section>, IndexStats)> {
        let start = Instant::now();

        tracing::info!("Starting document collection from {:?}", root);
        let files = self.walker.collect_files(root)?;
        tracing::info!("Found {} documents to index", files.len());

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_documents));
        let mut handles: Vec<(PathBuf, JoinHandle<Result<DocumentOutcome>>)> =
            Vec::with_capacity(files.len());

        for path in files {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(|e| PagesplitError::IndexingFailed(e.to_string()))?;

            let splitter = Arc::clone(&self.splitter);
            let source = Arc::clone(&self.source);
            let category = self.category.clone();
            let task_path = path.clone();

            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                process_document(&task_path, source.as_ref(), &splitter, &category)
            });
            handles.push((path, handle));
        }

        let total = handles.len();
        let mut stats = IndexStats::default();
        let mut all_sections = Vec::new();

        for (idx, (path, handle)) in handles.into_iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} documents processed", idx, total);
            }

            let outcome = handle
                .await
                .map_err(|e| PagesplitError::IndexingFailed(format!("Worker failed: {e}")))
                .and_then(|result| result);

            match outcome {
                Ok(doc) => {
                    tracing::debug!(
                        "Indexed {:?} ({} pages, {} sections)",
                        path,
                        doc.pages,
                        doc.sections.len()
                    );
                    stats.files_indexed += 1;
                    stats.pages_read += doc.pages;
                    all_sections.extend(doc.sections);
                }
                Err(e) => {
                    tracing::warn!("Failed to process {:?}: {}", path, e);
                    stats.files_skipped += 1;
                }
            }
        }

        stats.sections_created = all_sections.len();
        stats.duration_ms = start.elapsed().as_millis() as u64;
        stats.indexed_at = chrono::Utc::now().to_rfc3339();

        tracing::info!(
            "Indexing complete: {} documents indexed, {} skipped, \
             {} sections created in {}ms",
            stats.files_indexed,
            stats.files_skipped,
            stats.sections_created,
            stats.duration_ms
        );

        Ok((all_sections, stats))
    }
}

/// Load, split and wrap one document
fn process_document(
    path: &Path,
    source: &dyn PageSource,
    splitter: &TextSplitter,
    category: &str,
) -> Result<DocumentOutcome> {
    let document = source.load(path)?;

    // Blank documents still split to one empty chunk; an index has
    // no use for it
    let chunks: Vec<_> = splitter
        .split_pages(&document.pages)
        .into_iter()
        .filter(|chunk| !chunk.text.is_empty())
        .collect();

    Ok(DocumentOutcome {
        pages: document.pages.len(),
        sections: build_sections(chunks, &document.name, category, document.paged),
    })
}
