//! Offset to page attribution.
//!
//! Built once per document from the pages' recorded offsets; every
//! lookup is a binary search.

use crate::core::types::Page;

/// Sorted `(offset, page number)` pairs for one document
#[derive(Debug, Clone, Default)]
pub struct PageMap {
    entries: Vec<(usize, usize)>,
}

impl PageMap {
    pub fn new(pages: &[Page]) -> Self {
        let mut entries: Vec<(usize, usize)> = pages.iter().map(|p| (p.offset, p.index)).collect();
        // Stable, so pages sharing an offset keep their input order
        entries.sort_by_key(|&(offset, _)| offset);
        Self { entries }
    }

    /// Page whose text contains the character at `offset`.
    ///
    /// When several pages share an offset (empty pages), the last of
    /// them owns it. Offsets before the first page map to the first
    /// page.
    pub fn page_at(&self, offset: usize) -> Option<usize> {
        let idx = self.entries.partition_point(|&(start, _)| start <= offset);
        self.entries
            .get(idx.saturating_sub(1))
            .map(|&(_, page)| page)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
