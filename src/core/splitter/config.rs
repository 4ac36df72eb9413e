//! Splitter configuration.
//!
//! One immutable value carries every splitting knob. It is validated
//! once when a [`TextSplitter`](super::TextSplitter) is built and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::core::error::{PagesplitError, Result};

/// Section sizing and boundary-search settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SplitterConfig {
    /// Keep inline image markers (`<figure>` blocks, `![alt](src)`)
    /// intact inside a single section
    #[serde(default)]
    pub has_images: bool,

    /// Hard upper bound on section length, in characters
    #[serde(default = "default_max_section_length")]
    pub max_section_length: usize,

    /// How far the boundary search may scan in either direction
    /// from the target cut point
    #[serde(default = "default_sentence_search_limit")]
    pub sentence_search_limit: usize,

    /// Characters of the previous section repeated at the start of
    /// the next one
    #[serde(default = "default_section_overlap")]
    pub section_overlap: usize,

    /// A trailing remainder shorter than this is folded into the
    /// previous section when the result still fits in
    /// `max_section_length`
    #[serde(default = "default_min_section_length")]
    pub min_section_length: usize,
}

fn default_max_section_length() -> usize {
    1000
}

fn default_sentence_search_limit() -> usize {
    100
}

fn default_section_overlap() -> usize {
    100
}

fn default_min_section_length() -> usize {
    20
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            has_images: false,
            max_section_length: default_max_section_length(),
            sentence_search_limit: default_sentence_search_limit(),
            section_overlap: default_section_overlap(),
            min_section_length: default_min_section_length(),
        }
    }
}

impl SplitterConfig {
    /// Create a configuration with explicit sizes and defaults for
    /// everything else
    pub fn new(max_section_length: usize, sentence_search_limit: usize, section_overlap: usize) -> Self {
        Self {
            max_section_length,
            sentence_search_limit,
            section_overlap,
            ..Self::default()
        }
    }

    /// Enable or disable image marker preservation
    pub fn with_images(mut self, has_images: bool) -> Self {
        self.has_images = has_images;
        self
    }

    /// Override the minimum trailing section length
    pub fn with_min_section_length(mut self, min_section_length: usize) -> Self {
        self.min_section_length = min_section_length;
        self
    }

    /// Reject configurations that cannot make forward progress
    pub fn validate(&self) -> Result<()> {
        if self.max_section_length == 0 {
            return Err(PagesplitError::ConfigError(
                "Max section length must be non-zero".to_string(),
            ));
        }

        if self.section_overlap >= self.max_section_length {
            return Err(PagesplitError::ConfigError(format!(
                "Section overlap ({}) must be less than max section length ({})",
                self.section_overlap, self.max_section_length
            )));
        }

        if self.min_section_length >= self.max_section_length {
            return Err(PagesplitError::ConfigError(format!(
                "Min section length ({}) must be less than max section length ({})",
                self.min_section_length, self.max_section_length
            )));
        }

        Ok(())
    }
}
