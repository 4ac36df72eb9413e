// Page attribution across multi-page documents

use crate::common::{assert_chunks_match_source, prose, splitter};
use pagesplit::Page;

/// Pages numbered from 1 with offsets computed from their texts
fn numbered_pages(texts: &[String]) -> Vec<Page> {
    let mut offset = 0;
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let page = Page::new(i + 1, offset, text.as_str());
            offset += text.chars().count();
            page
        })
        .collect()
}

fn expected_page(pages: &[Page], offset: usize) -> usize {
    pages
        .iter()
        .filter(|p| p.offset <= offset)
        .last()
        .map(|p| p.index)
        .unwrap_or(pages[0].index)
}

#[test]
fn test_chunks_report_page_of_first_character() {
    let pages = numbered_pages(&[prose(10, 0), prose(10, 1), prose(10, 2)]);
    let chunks = splitter(300, 30, 30).split_pages(&pages);

    let text: String = pages.iter().map(|p| p.text.as_str()).collect();
    assert_chunks_match_source(&text, &chunks);

    for chunk in &chunks {
        assert_eq!(chunk.page_number, expected_page(&pages, chunk.start_offset));
    }
    // Every page starts at least one chunk
    for page in &pages {
        assert!(chunks.iter().any(|c| c.page_number == page.index));
    }
}

#[test]
fn test_sections_cross_page_boundaries() {
    let pages = numbered_pages(&[prose(3, 0), prose(3, 1), prose(3, 2)]);
    let total: usize = pages.iter().map(|p| p.text.chars().count()).sum();
    let chunks = splitter(total, 30, 30).split_pages(&pages);

    // The whole document fits in one section, credited to page 1
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].page_number, 1);
}

#[test]
fn test_empty_pages_are_skipped_for_attribution() {
    let pages = vec![
        Page::new(1, 0, ""),
        Page::new(2, 0, ""),
        Page::new(3, 0, prose(10, 0)),
    ];
    let chunks = splitter(200, 20, 20).split_pages(&pages);

    assert!(chunks.len() > 1);
    assert_eq!(chunks[0].page_number, 3);
}

#[test]
fn test_leading_whitespace_moves_attribution_forward() {
    // Blank lines around the page break are trimmed away, so a chunk
    // starting there is credited to the page of its first visible
    // character
    let first = format!("{}\n\n", prose(4, 0).trim_end());
    let second = format!("\n\n{}", prose(12, 1));
    let pages = numbered_pages(&[first.clone(), second]);
    let chunks = splitter(250, 25, 25).split_pages(&pages);

    let boundary = first.chars().count();
    for chunk in &chunks {
        let expected = if chunk.start_offset < boundary { 1 } else { 2 };
        assert_eq!(chunk.page_number, expected);
    }
}
