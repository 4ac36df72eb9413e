//! Index-ready section records.
//!
//! Wraps split chunks with the fields a search index expects: a
//! stable id derived from the file name, the category, and a citation
//! target pointing at the source page.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::{Section, SplitChunk};

/// Characters that may not appear in the readable part of an id
static NON_ID_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9a-zA-Z_-]").unwrap());

/// Id prefix shared by every section of one file.
///
/// The readable part keeps `[0-9A-Za-z_-]` and replaces everything
/// else with `_`; the base64 part keeps ids unique for names that
/// sanitise to the same string.
pub fn filename_to_id(filename: &str) -> String {
    let ascii = NON_ID_CHARS.replace_all(filename, "_");
    let encoded = STANDARD.encode(filename.as_bytes());
    format!("file-{ascii}-{encoded}")
}

/// Citation target for a section: `name#page=N` (1-based) for paged
/// documents, the bare file name otherwise
pub fn source_page(filename: &str, page_number: usize, paged: bool) -> String {
    if paged {
        format!("{filename}#page={}", page_number + 1)
    } else {
        filename.to_string()
    }
}

/// Build sections for one document, numbering them in chunk order
pub fn build_sections(
    chunks: Vec<SplitChunk>,
    filename: &str,
    category: &str,
    paged: bool,
) -> Vec<Section> {
    let id_prefix = filename_to_id(filename);

    chunks
        .into_iter()
        .enumerate()
        .map(|(n, chunk)| Section {
            id: format!("{id_prefix}-page-{n}"),
            sourcepage: source_page(filename, chunk.page_number, paged),
            content: chunk.text,
            category: category.to_string(),
            sourcefile: filename.to_string(),
        })
        .collect()
}
