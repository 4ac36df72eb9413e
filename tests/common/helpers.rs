// Test helper functions

use pagesplit::core::config::Config;
use pagesplit::core::services::Services;
use pagesplit::core::splitter::{ProtectedSpans, SplitterConfig, TextSplitter};
use pagesplit::SplitChunk;

/// Splitter with explicit sizes and a small minimum section length
#[allow(dead_code)]
pub fn splitter(max: usize, limit: usize, overlap: usize) -> TextSplitter {
    TextSplitter::new(SplitterConfig::new(max, limit, overlap).with_min_section_length(5))
        .expect("valid splitter config")
}

/// Services with default configuration
#[allow(dead_code)]
pub fn create_test_services() -> Services {
    Services::new(Config::default()).expect("default config is valid")
}

/// Every chunk is the trimmed slice of the source it claims to be,
/// and chunks start in increasing order
#[allow(dead_code)]
pub fn assert_chunks_match_source(text: &str, chunks: &[SplitChunk]) {
    let chars: Vec<char> = text.chars().collect();
    for chunk in chunks {
        let slice: String = chars[chunk.start_offset..chunk.end_offset].iter().collect();
        assert_eq!(chunk.text, slice, "chunk text differs from its source range");
        assert_eq!(chunk.text, chunk.text.trim(), "chunk is not trimmed");
    }
    for pair in chunks.windows(2) {
        assert!(
            pair[1].start_offset > pair[0].start_offset,
            "chunks out of order: {} then {}",
            pair[0].start_offset,
            pair[1].start_offset
        );
    }
}

/// Every non-whitespace character lies inside some chunk
#[allow(dead_code)]
pub fn assert_covers_text(text: &str, chunks: &[SplitChunk]) {
    for (pos, c) in text.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        assert!(
            chunks
                .iter()
                .any(|chunk| chunk.start_offset <= pos && pos < chunk.end_offset),
            "character {c:?} at {pos} is not in any chunk"
        );
    }
}

/// No chunk holds part of a protected span: each span is either fully
/// inside a chunk or disjoint from it
#[allow(dead_code)]
pub fn assert_spans_intact(text: &str, has_images: bool, chunks: &[SplitChunk]) {
    let chars: Vec<char> = text.chars().collect();
    let spans = ProtectedSpans::scan(&chars, has_images);
    assert!(!spans.is_empty(), "fixture has no protected spans");

    for span in spans.iter() {
        for chunk in chunks {
            let overlaps = chunk.start_offset < span.end && span.start < chunk.end_offset;
            if overlaps {
                assert!(
                    chunk.start_offset <= span.start && span.end <= chunk.end_offset,
                    "chunk {}..{} cuts protected span {}..{}",
                    chunk.start_offset,
                    chunk.end_offset,
                    span.start,
                    span.end
                );
            }
        }
    }
}
