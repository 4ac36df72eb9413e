//! Document splitting module.
//!
//! Turns a document's extracted pages into bounded, overlapping
//! sections for embedding and search indexing. Key features:
//!
//! - Sentence-first, then word-boundary cut selection
//! - Configurable section length, search reach and overlap
//! - Tables (and optionally image markers) are never split
//! - Page attribution for every section
//!
//! # Safety
//!
//! Like the rest of the crate, the splitter works on `char` positions
//! so multi-byte text can never cause a panic at a cut.

pub mod boundary;
pub mod config;
pub mod pages;
pub mod spans;
pub mod text_splitter;

pub use config::SplitterConfig;
pub use pages::PageMap;
pub use spans::ProtectedSpans;
pub use text_splitter::TextSplitter;
