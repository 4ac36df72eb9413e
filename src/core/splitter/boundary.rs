//! Boundary search over a document buffer.
//!
//! Positions are cut points: cutting at `pos` ends a section with
//! `chars[pos - 1]` and starts the rest at `chars[pos]`.

use super::spans::ProtectedSpans;

/// Terminators that only end a sentence when followed by whitespace
const SENTENCE_ENDINGS: [char; 3] = ['.', '!', '?'];

/// Full-width and CJK terminators, which are not followed by spaces
const WIDE_SENTENCE_ENDINGS: [char; 6] = ['。', '．', '‼', '⁇', '⁈', '⁉'];

/// Punctuation a section may end with when no sentence end is in reach
const TRAILING_BREAKS: [char; 7] = [',', '、', ';', ':', ')', ']', '}'];

/// Punctuation a section may start with
const LEADING_BREAKS: [char; 3] = ['(', '[', '{'];

/// Whether `pos` directly follows the end of a sentence or paragraph
pub fn is_sentence_boundary(chars: &[char], pos: usize) -> bool {
    if pos == 0 || pos > chars.len() {
        return false;
    }
    let prev = chars[pos - 1];

    if WIDE_SENTENCE_ENDINGS.contains(&prev) {
        return true;
    }
    if SENTENCE_ENDINGS.contains(&prev) {
        return chars.get(pos).map_or(true, |next| next.is_whitespace());
    }
    // Paragraph break
    prev == '\n' && pos >= 2 && chars[pos - 2] == '\n'
}

/// Whether `pos` falls between two words
pub fn is_word_boundary(chars: &[char], pos: usize) -> bool {
    if pos == 0 || pos >= chars.len() {
        return pos <= chars.len();
    }
    let prev = chars[pos - 1];
    let next = chars[pos];

    prev.is_whitespace()
        || next.is_whitespace()
        || TRAILING_BREAKS.contains(&prev)
        || LEADING_BREAKS.contains(&next)
}

/// Nearest-boundary search that honours protected spans
pub struct BoundarySearch<'a> {
    chars: &'a [char],
    spans: &'a ProtectedSpans,
}

impl<'a> BoundarySearch<'a> {
    pub fn new(chars: &'a [char], spans: &'a ProtectedSpans) -> Self {
        Self { chars, spans }
    }

    /// Best cut in `lo..=hi`, closest to `target`.
    ///
    /// Sentence ends beat word boundaries regardless of distance. At
    /// equal distance the backward position wins.
    pub fn find_cut(&self, target: usize, lo: usize, hi: usize) -> Option<usize> {
        self.nearest(target, lo, hi, |pos| is_sentence_boundary(self.chars, pos))
            .or_else(|| {
                self.nearest(target, lo, hi, |pos| {
                    is_word_boundary(self.chars, pos) || self.spans.is_edge(pos)
                })
            })
    }

    fn nearest(
        &self,
        target: usize,
        lo: usize,
        hi: usize,
        accept: impl Fn(usize) -> bool,
    ) -> Option<usize> {
        if lo > hi {
            return None;
        }
        let target = target.clamp(lo, hi);
        let reach = (target - lo).max(hi - target);
        let usable = |pos: usize| !self.spans.is_forbidden(pos) && accept(pos);

        for distance in 0..=reach {
            if let Some(back) = target.checked_sub(distance) {
                if back >= lo && usable(back) {
                    return Some(back);
                }
            }
            let forward = target + distance;
            if distance > 0 && forward <= hi && usable(forward) {
                return Some(forward);
            }
        }
        None
    }
}
