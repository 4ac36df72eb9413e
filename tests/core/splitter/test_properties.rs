// Properties every split must satisfy, checked over several configurations

use crate::common::{assert_chunks_match_source, assert_covers_text, prose, splitter};
use pagesplit::{Page, SplitterConfig, TextSplitter};

const CONFIGS: [(usize, usize, usize); 5] = [
    (1000, 100, 100),
    (500, 50, 50),
    (300, 100, 30),
    (200, 20, 0),
    (120, 10, 10),
];

#[test]
fn test_chunks_are_trimmed_source_slices() {
    let text = prose(60, 0);
    for (max, limit, overlap) in CONFIGS {
        let chunks = splitter(max, limit, overlap).split_pages(&[Page::new(0, 0, text.as_str())]);
        assert_chunks_match_source(&text, &chunks);
    }
}

#[test]
fn test_every_character_is_covered() {
    let text = prose(60, 0);
    for (max, limit, overlap) in CONFIGS {
        let chunks = splitter(max, limit, overlap).split_pages(&[Page::new(0, 0, text.as_str())]);
        assert_covers_text(&text, &chunks);
    }
}

#[test]
fn test_no_chunk_exceeds_max() {
    let text = prose(60, 0);
    for (max, limit, overlap) in CONFIGS {
        let chunks = splitter(max, limit, overlap).split_pages(&[Page::new(0, 0, text.as_str())]);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(
                chunk.char_len() <= max,
                "{} chars with max {max}",
                chunk.char_len()
            );
        }
    }
}

#[test]
fn test_whitespace_heavy_tail_keeps_bound() {
    // A long whitespace run before a short final word leaves a tail
    // below the minimum; it must never stretch a section past max
    let configs: [(usize, usize, usize, usize); 5] = [
        (1000, 100, 100, 20),
        (500, 50, 50, 40),
        (300, 100, 30, 50),
        (200, 20, 0, 20),
        (120, 10, 10, 30),
    ];

    for gap in [50, 150, 400, 900] {
        for seed in 0..3 {
            let text = format!("{}{}end.", prose(20 + seed * 7, seed), " ".repeat(gap));
            for (max, limit, overlap, min) in configs {
                let splitter = TextSplitter::new(
                    SplitterConfig::new(max, limit, overlap).with_min_section_length(min),
                )
                .unwrap();
                let chunks = splitter.split_pages(&[Page::new(0, 0, text.as_str())]);

                assert_chunks_match_source(&text, &chunks);
                assert_covers_text(&text, &chunks);
                for chunk in &chunks {
                    assert!(
                        chunk.char_len() <= max,
                        "{} chars with max {max} (gap {gap}, min {min})",
                        chunk.char_len()
                    );
                }
            }
        }
    }
}

#[test]
fn test_adjacent_chunks_share_overlap() {
    let text = prose(60, 0);
    for (max, limit, overlap) in CONFIGS {
        let chunks = splitter(max, limit, overlap).split_pages(&[Page::new(0, 0, text.as_str())]);
        for pair in chunks.windows(2) {
            let shared = pair[0].end_offset as isize - pair[1].start_offset as isize;
            assert!(shared <= overlap as isize, "shared {shared} > {overlap}");
            if overlap > 0 {
                assert!(shared > 0, "no overlap between adjacent chunks");
            }
        }
    }
}

#[test]
fn test_sections_end_at_sentences_when_reachable() {
    let text = prose(60, 0);
    for (max, limit, overlap) in [(1000, 100, 100), (500, 50, 50), (300, 100, 30)] {
        let chunks = splitter(max, limit, overlap).split_pages(&[Page::new(0, 0, text.as_str())]);
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(
                chunk.text.ends_with('.'),
                "section ends mid-sentence: {:?}",
                &chunk.text[chunk.text.len().saturating_sub(20)..]
            );
        }
    }
}

#[test]
fn test_short_document_is_single_trimmed_chunk() {
    let text = format!("\n  {}  \n", prose(3, 0).trim());
    let chunks = TextSplitter::new(SplitterConfig::default())
        .unwrap()
        .split_pages(&[Page::new(4, 0, text.as_str())]);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, text.trim());
    assert_eq!(chunks[0].page_number, 4);
}

#[test]
fn test_split_is_deterministic() {
    let text = prose(80, 3);
    let splitter = splitter(400, 40, 40);
    let pages = [Page::new(0, 0, text.as_str())];

    let first = splitter.split_pages(&pages);
    for _ in 0..5 {
        assert_eq!(splitter.split_pages(&pages), first);
    }
}

#[test]
fn test_multibyte_text() {
    let text = "Der Selbstbehalt gilt für alle Tarife. 保険料は毎月支払います。Ünïcödé 🦀 works! ".repeat(30);
    let chunks = splitter(150, 20, 15).split_pages(&[Page::new(0, 0, text.as_str())]);

    assert!(chunks.len() > 1);
    assert_chunks_match_source(&text, &chunks);
    assert_covers_text(&text, &chunks);
    assert!(chunks.iter().all(|c| c.char_len() <= 150));
}
