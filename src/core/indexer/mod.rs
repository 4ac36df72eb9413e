//! Document indexing module.
//!
//! Finds documents on disk and turns them into index-ready sections.
//! Key features:
//!
//! - Single file or directory input with glob filtering
//! - Bounded concurrent splitting on blocking worker tasks
//! - Deterministic output order
//! - Per-document failures logged and counted, never fatal

pub mod pipeline;
pub mod walker;

pub use pipeline::IndexingPipeline;
pub use walker::FileWalker;
