//! Page-aware section splitter.
//!
//! Splits the concatenated text of a document's pages into bounded,
//! overlapping sections. Cuts prefer sentence ends, then word
//! boundaries, and never land inside a protected span (tables, and
//! image markers when enabled).
//!
//! All sizes and offsets are measured in **characters**, so no cut
//! can fall inside a multi-byte UTF-8 sequence.
//!
//! # Example
//!
//! ```
//! use pagesplit::{Page, SplitterConfig, TextSplitter};
//!
//! let splitter = TextSplitter::new(SplitterConfig::default()).unwrap();
//! let chunks = splitter.split_pages(&[Page::new(1, 0, "hello, world")]);
//!
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].text, "hello, world");
//! assert_eq!(chunks[0].page_number, 1);
//! ```

use super::boundary::BoundarySearch;
use super::config::SplitterConfig;
use super::pages::PageMap;
use super::spans::ProtectedSpans;
use crate::core::error::Result;
use crate::core::types::{Page, SplitChunk};

/// Splits page sequences into sections.
///
/// Immutable after construction; one instance can serve any number of
/// documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct TextSplitter {
    config: SplitterConfig,
}

/// Per-document state for one splitting pass
struct Pass<'a> {
    chars: &'a [char],
    pages: &'a PageMap,
    spans: &'a ProtectedSpans,
}

impl TextSplitter {
    /// Create a splitter, rejecting configurations that cannot make
    /// forward progress
    pub fn new(config: SplitterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration this splitter was built with
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Split one document's pages into ordered sections.
    ///
    /// An empty page list yields no sections. A document no longer
    /// than `max_section_length` yields exactly one section holding
    /// the trimmed text, even when that text is blank.
    pub fn split_pages(&self, pages: &[Page]) -> Vec<SplitChunk> {
        if pages.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = pages.iter().flat_map(|p| p.text.chars()).collect();
        let page_map = PageMap::new(pages);

        if chars.len() <= self.config.max_section_length {
            let pass = Pass {
                chars: &chars,
                pages: &page_map,
                spans: &ProtectedSpans::default(),
            };
            return vec![pass.chunk(0, chars.len())];
        }

        let spans = ProtectedSpans::scan(&chars, self.config.has_images);
        let pass = Pass {
            chars: &chars,
            pages: &page_map,
            spans: &spans,
        };

        let chunks = self.split_buffer(&pass);

        tracing::debug!(
            "Split {} chars over {} pages into {} sections ({} protected spans)",
            chars.len(),
            pages.len(),
            chunks.len(),
            spans.len()
        );

        chunks
    }

    fn split_buffer(&self, pass: &Pass<'_>) -> Vec<SplitChunk> {
        let len = pass.chars.len();
        let mut chunks: Vec<SplitChunk> = Vec::new();
        let mut start = 0usize;
        let mut previous_cut = 0usize;

        loop {
            if len - start <= self.config.max_section_length {
                self.push_remainder(pass, &mut chunks, start, previous_cut);
                break;
            }

            let cut = self.choose_cut(pass, start);
            if !pass.is_blank(start, cut) {
                chunks.push(pass.chunk(start, cut));
            }
            previous_cut = cut;

            if cut >= len {
                break;
            }
            start = self.next_start(pass.spans, start, cut);
        }

        chunks
    }

    /// Pick the end of the section starting at `start`. The caller
    /// guarantees more than `max_section_length` characters remain.
    fn choose_cut(&self, pass: &Pass<'_>, start: usize) -> usize {
        let max = self.config.max_section_length;
        let limit = self.config.sentence_search_limit;

        // The window ends at the hard bound and is centred `limit`
        // characters before it, so both scan directions stay in bounds.
        // It never reaches back into the overlap of this section.
        let hard_end = start + max;
        let lo = (start + self.config.section_overlap + 1).max(hard_end.saturating_sub(2 * limit));
        let target = hard_end.saturating_sub(limit).max(lo);

        let search = BoundarySearch::new(pass.chars, pass.spans);
        if let Some(cut) = search.find_cut(target, lo, hard_end) {
            return cut;
        }

        match pass.spans.containing(hard_end) {
            Some(span) if span.start > start => {
                tracing::debug!(
                    "Section at offset {} ends at protected span starting at {}",
                    start,
                    span.start
                );
                span.start
            }
            Some(span) => {
                tracing::debug!(
                    "Protected span {}..{} exceeds max section length ({} chars), keeping it whole",
                    span.start,
                    span.end,
                    span.end - span.start
                );
                span.end
            }
            None => hard_end,
        }
    }

    /// Start of the section after one that ended at `cut`
    fn next_start(&self, spans: &ProtectedSpans, start: usize, cut: usize) -> usize {
        // A protected block that was pushed out of this section leads
        // the next one, without overlap in front of it
        if spans.starts_at(cut) {
            return cut;
        }

        let next = cut
            .saturating_sub(self.config.section_overlap)
            .max(start + 1);

        match spans.containing(next) {
            Some(span) => span.end.min(cut),
            None => next,
        }
    }

    /// Emit the final `start..len` window. A remainder shorter than
    /// `min_section_length` is folded into the previous section when
    /// the merged section still fits in `max_section_length`, and
    /// stands alone otherwise.
    fn push_remainder(
        &self,
        pass: &Pass<'_>,
        chunks: &mut Vec<SplitChunk>,
        start: usize,
        previous_cut: usize,
    ) {
        let len = pass.chars.len();

        // Nothing past the previous section but overlap and whitespace
        if !chunks.is_empty() && pass.is_blank(previous_cut.max(start), len) {
            return;
        }

        let tail = pass.chunk(start, len);
        match chunks.last_mut() {
            Some(last)
                if tail.char_len() < self.config.min_section_length
                    && tail.end_offset - last.start_offset <= self.config.max_section_length =>
            {
                tracing::debug!(
                    "Folding {} char tail into section at offset {}",
                    tail.char_len(),
                    last.start_offset
                );
                *last = pass.chunk(last.start_offset, len);
            }
            _ => chunks.push(tail),
        }
    }
}

impl Pass<'_> {
    fn is_blank(&self, from: usize, to: usize) -> bool {
        self.chars[from..to].iter().all(|c| c.is_whitespace())
    }

    /// Build a chunk from the raw window `from..to`, trimming
    /// surrounding whitespace
    fn chunk(&self, from: usize, to: usize) -> SplitChunk {
        let window = &self.chars[from..to];
        let lead = window.iter().take_while(|c| c.is_whitespace()).count();
        let (start, end) = if lead == window.len() {
            (from, from)
        } else {
            let trail = window.iter().rev().take_while(|c| c.is_whitespace()).count();
            (from + lead, to - trail)
        };

        SplitChunk {
            text: self.chars[start..end].iter().collect(),
            page_number: self.pages.page_at(start).unwrap_or_default(),
            start_offset: start,
            end_offset: end,
        }
    }
}
