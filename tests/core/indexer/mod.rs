//! Indexer layer tests
//!
//! Document discovery, page loading and the concurrent pipeline.

mod test_sources;
