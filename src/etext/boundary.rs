use std::ops::Range;

use crate::error::EtextError;

pub const START_MARKER: &str = "*** START OF THIS PROJECT GUTENBERG EBOOK";
pub const END_MARKER: &str = "*** END OF THIS PROJECT GUTENBERG EBOOK";

/// The two paragraph prefixes that fence the body of an etext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: START_MARKER.to_string(),
            end: END_MARKER.to_string(),
        }
    }
}

/// What to do when a marker paragraph is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPolicy {
    /// Fall back to the start or end of the document and log a warning
    Lenient,
    /// Fail with `MarkerNotFound`
    Strict,
}

/// Positions of the marker paragraphs in a paragraph sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries {
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub len: usize,
}

impl Boundaries {
    /// Locate both markers. Each search is independent and returns the
    /// lowest matching index.
    pub fn locate(paragraphs: &[String], markers: &Markers) -> Self {
        Self {
            start: find_prefix(paragraphs, &markers.start),
            end: find_prefix(paragraphs, &markers.end),
            len: paragraphs.len(),
        }
    }

    /// Indices of the paragraphs strictly between the markers.
    pub fn select(
        &self,
        markers: &Markers,
        policy: MarkerPolicy,
    ) -> Result<Range<usize>, EtextError> {
        if policy == MarkerPolicy::Strict {
            if self.start.is_none() {
                return Err(EtextError::MarkerNotFound {
                    marker: markers.start.clone(),
                });
            }
            if self.end.is_none() {
                return Err(EtextError::MarkerNotFound {
                    marker: markers.end.clone(),
                });
            }
        }

        let from = match self.start {
            Some(s) => s + 1,
            None => {
                tracing::warn!(marker = %markers.start, "start marker not found, reading from the first paragraph");
                0
            }
        };

        let to = match self.end {
            Some(e) => e,
            None => {
                tracing::warn!(marker = %markers.end, "end marker not found, reading to the last paragraph");
                self.len
            }
        };

        if to < from {
            tracing::warn!(
                start = ?self.start,
                end = ?self.end,
                "end marker precedes start marker, nothing selected"
            );
            return Ok(from..from);
        }

        Ok(from..to)
    }
}

fn find_prefix(paragraphs: &[String], prefix: &str) -> Option<usize> {
    paragraphs.iter().position(|p| p.starts_with(prefix))
}
