//! Core data types for pagesplit.
//!
//! This module defines the records that flow through the splitter
//! and the indexing pipeline: extracted pages in, split chunks and
//! index-ready sections out.

use serde::{Deserialize, Serialize};

/// A single extracted page of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number as reported by the page source
    pub index: usize,

    /// Character offset of this page within the concatenated
    /// document text
    #[serde(default)]
    pub offset: usize,

    /// Raw extracted text (may be empty)
    #[serde(default)]
    pub text: String,
}

impl Page {
    pub fn new(index: usize, offset: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            offset,
            text: text.into(),
        }
    }
}

/// A bounded piece of a document produced by the splitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitChunk {
    /// Chunk content, trimmed of surrounding whitespace
    pub text: String,

    /// Page the chunk begins in
    pub page_number: usize,

    /// Character offset where the trimmed text starts in the
    /// concatenated document
    pub start_offset: usize,

    /// Character offset where the trimmed text ends (exclusive)
    pub end_offset: usize,
}

impl SplitChunk {
    /// Length of the chunk in characters
    pub fn char_len(&self) -> usize {
        self.end_offset - self.start_offset
    }
}

/// Index-ready record built from a split chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Stable document id: `file-{ascii}-{base64}-page-{n}`
    pub id: String,

    /// Chunk text
    pub content: String,

    /// Caller-supplied category
    pub category: String,

    /// Citation target, `name#page=N` for paged documents
    pub sourcepage: String,

    /// Source file name
    pub sourcefile: String,
}

/// Statistics from an indexing run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of documents successfully split
    pub files_indexed: usize,

    /// Number of documents that failed to load
    pub files_skipped: usize,

    /// Total pages read across all documents
    pub pages_read: usize,

    /// Total sections produced
    pub sections_created: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,

    /// Completion timestamp (RFC 3339)
    pub indexed_at: String,
}
