//! Page sources.
//!
//! Text extraction (PDF parsing, OCR) happens upstream; this module
//! only turns what extraction leaves on disk into ordered [`Page`]s:
//!
//! - `*.pages.json`: a JSON array of `{index, offset, text}` objects
//! - anything else: UTF-8 text, paginated on form feeds (`\x0C`)

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{PagesplitError, Result};
use crate::core::types::Page;

/// Suffix marking a pre-extracted page list
pub const PAGES_JSON_SUFFIX: &str = ".pages.json";

/// Page separator in paginated text files
pub const FORM_FEED: char = '\u{0C}';

/// A loaded document, ready for splitting
#[derive(Debug, Clone)]
pub struct Document {
    /// File name used for section ids and citations
    pub name: String,

    /// Pages in reading order
    pub pages: Vec<Page>,

    /// Whether citations should point at individual pages
    pub paged: bool,
}

/// Anything that can produce the pages of a document
pub trait PageSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<Document>;
}

/// Loads text files and JSON page lists from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPageSource;

/// Page entry as it appears in a `.pages.json` file
#[derive(Debug, Deserialize)]
struct RawPage {
    index: usize,
    #[serde(default)]
    offset: Option<usize>,
    #[serde(default)]
    text: Option<String>,
}

impl PageSource for TextPageSource {
    fn load(&self, path: &Path) -> Result<Document> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PagesplitError::InvalidPath(format!("{path:?}")))?;

        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                PagesplitError::IndexingFailed(format!("Skipping non-UTF-8 file: {path:?}"))
            } else {
                PagesplitError::IndexingFailed(format!("Failed to read {path:?}: {e}"))
            }
        })?;

        if let Some(source_name) = file_name.strip_suffix(PAGES_JSON_SUFFIX) {
            let pages = pages_from_json(&contents)?;
            return Ok(Document {
                name: source_name.to_string(),
                pages,
                paged: true,
            });
        }

        let pages = pages_from_text(&contents);
        let paged = pages.len() > 1 || file_name.to_ascii_lowercase().ends_with(".pdf");
        Ok(Document {
            name: file_name.to_string(),
            pages,
            paged,
        })
    }
}

/// Paginate text on form feeds. Offsets are running character counts
/// and the separators themselves are dropped.
pub fn pages_from_text(text: &str) -> Vec<Page> {
    let mut offset = 0;
    text.split(FORM_FEED)
        .enumerate()
        .map(|(index, page_text)| {
            let page = Page::new(index, offset, page_text);
            offset += page_text.chars().count();
            page
        })
        .collect()
}

/// Parse a JSON page list.
///
/// Page indexes must increase strictly and offsets must not decrease.
/// If any page omits its offset, all offsets are recomputed from the
/// page texts.
pub fn pages_from_json(json: &str) -> Result<Vec<Page>> {
    let raw: Vec<RawPage> = serde_json::from_str(json)?;
    let recompute = raw.iter().any(|p| p.offset.is_none());

    let mut pages = Vec::with_capacity(raw.len());
    let mut running = 0usize;
    for entry in raw {
        let text = entry.text.unwrap_or_default();
        let offset = if recompute {
            running
        } else {
            entry.offset.unwrap_or(running)
        };
        running += text.chars().count();
        pages.push(Page::new(entry.index, offset, text));
    }

    for pair in pages.windows(2) {
        if pair[1].index <= pair[0].index {
            return Err(PagesplitError::InvalidPages(format!(
                "page index {} follows {}",
                pair[1].index, pair[0].index
            )));
        }
        if pair[1].offset < pair[0].offset {
            return Err(PagesplitError::InvalidPages(format!(
                "page {} offset {} is before previous offset {}",
                pair[1].index, pair[1].offset, pair[0].offset
            )));
        }
    }

    Ok(pages)
}
