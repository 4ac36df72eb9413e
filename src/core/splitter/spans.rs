//! Protected span detection.
//!
//! Tables (and, when enabled, image markers) are found in one pass
//! over the document buffer before any cut is chosen. The boundary
//! search then treats the inside of every span as a forbidden cut
//! zone, which keeps the character scan itself structure-agnostic.

use std::ops::Range;

/// Sorted, non-overlapping character ranges that must not be cut
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedSpans {
    spans: Vec<Range<usize>>,
}

impl ProtectedSpans {
    /// Scan a document buffer for tables, plus image markers when
    /// `has_images` is set
    pub fn scan(chars: &[char], has_images: bool) -> Self {
        let mut spans = Vec::new();
        scan_element(chars, "table", &mut spans);
        if has_images {
            scan_element(chars, "figure", &mut spans);
            scan_markdown_images(chars, &mut spans);
        }
        Self::from_ranges(spans)
    }

    /// Build from arbitrary ranges, sorting and merging overlaps
    pub fn from_ranges(mut ranges: Vec<Range<usize>>) -> Self {
        ranges.retain(|r| r.start < r.end);
        ranges.sort_by_key(|r| (r.start, r.end));

        let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match merged.last_mut() {
                Some(last) if range.start < last.end => {
                    last.end = last.end.max(range.end);
                }
                _ => merged.push(range),
            }
        }

        Self { spans: merged }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Range<usize>> {
        self.spans.iter()
    }

    /// The span strictly enclosing `pos`, i.e. `start < pos < end`
    pub fn containing(&self, pos: usize) -> Option<&Range<usize>> {
        let idx = self.spans.partition_point(|r| r.start < pos);
        let candidate = self.spans.get(idx.checked_sub(1)?)?;
        (pos < candidate.end).then_some(candidate)
    }

    /// Whether cutting at `pos` would tear a span apart
    pub fn is_forbidden(&self, pos: usize) -> bool {
        self.containing(pos).is_some()
    }

    /// Whether a span begins exactly at `pos`
    pub fn starts_at(&self, pos: usize) -> bool {
        self.spans
            .binary_search_by_key(&pos, |r| r.start)
            .is_ok()
    }

    /// Whether `pos` is the first or one-past-last position of a span
    pub fn is_edge(&self, pos: usize) -> bool {
        self.starts_at(pos) || self.spans.iter().any(|r| r.end == pos)
    }
}

/// Record every top-level `<tag ...> ... </tag>` element. Nested
/// elements of the same tag stay inside their parent; an element left
/// open runs to the end of the buffer.
fn scan_element(chars: &[char], tag: &str, spans: &mut Vec<Range<usize>>) {
    let open: Vec<char> = format!("<{tag}").chars().collect();
    let close: Vec<char> = format!("</{tag}").chars().collect();

    let mut depth = 0usize;
    let mut open_at = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        if matches_tag(chars, i, &close) {
            let end = tag_end(chars, i + close.len());
            if depth > 0 {
                depth -= 1;
                if depth == 0 {
                    spans.push(open_at..end);
                }
            }
            i = end;
        } else if matches_tag(chars, i, &open) {
            if depth == 0 {
                open_at = i;
            }
            depth += 1;
            i += open.len();
        } else {
            i += 1;
        }
    }

    if depth > 0 {
        tracing::debug!(
            "Unclosed <{}> at offset {}, protecting to end of document",
            tag,
            open_at
        );
        spans.push(open_at..chars.len());
    }
}

/// Case-insensitive tag name match that refuses prefixes of longer
/// names (`<tablet` is not `<table`)
fn matches_tag(chars: &[char], at: usize, pattern: &[char]) -> bool {
    let Some(window) = chars.get(at..at + pattern.len()) else {
        return false;
    };
    if !window
        .iter()
        .zip(pattern)
        .all(|(c, p)| c.eq_ignore_ascii_case(p))
    {
        return false;
    }
    chars
        .get(at + pattern.len())
        .map_or(true, |next| !next.is_alphanumeric())
}

/// Position just past the `>` closing a tag, or `from` when the tag is
/// never closed
fn tag_end(chars: &[char], from: usize) -> usize {
    for (offset, c) in chars[from.min(chars.len())..].iter().enumerate() {
        match c {
            '>' => return from + offset + 1,
            '<' => break,
            _ => {}
        }
    }
    from.min(chars.len())
}

/// Markdown image references, `![alt](target)`, on a single line
fn scan_markdown_images(chars: &[char], spans: &mut Vec<Range<usize>>) {
    let mut i = 0usize;
    while i + 1 < chars.len() {
        if chars[i] == '!' && chars[i + 1] == '[' {
            if let Some(end) = markdown_image_end(chars, i + 2) {
                spans.push(i..end);
                i = end;
                continue;
            }
        }
        i += 1;
    }
}

fn markdown_image_end(chars: &[char], from: usize) -> Option<usize> {
    let close_bracket = find_on_line(chars, from, ']')?;
    if chars.get(close_bracket + 1) != Some(&'(') {
        return None;
    }
    let close_paren = find_on_line(chars, close_bracket + 2, ')')?;
    Some(close_paren + 1)
}

fn find_on_line(chars: &[char], from: usize, target: char) -> Option<usize> {
    chars
        .get(from..)?
        .iter()
        .take_while(|c| **c != '\n')
        .position(|c| *c == target)
        .map(|offset| from + offset)
}
