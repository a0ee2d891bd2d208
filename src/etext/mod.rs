//! Project Gutenberg etext body extraction.
//!
//! A run loads the whole file, splits it into blank-line separated
//! paragraphs, keeps the ones between the START and END marker paragraphs
//! and reflows each onto a single line.

pub mod boundary;
pub mod emit;
pub mod loader;
pub mod normalize;

pub use boundary::{Boundaries, MarkerPolicy, Markers};

use std::path::Path;

use crate::error::EtextError;

/// Extract the reflowed body lines from etext contents.
pub fn extract_body(
    text: &str,
    markers: &Markers,
    policy: MarkerPolicy,
) -> Result<Vec<String>, EtextError> {
    let paragraphs = normalize::paragraphs(text);
    let bounds = Boundaries::locate(&paragraphs, markers);
    let range = bounds.select(markers, policy)?;

    tracing::debug!(
        paragraphs = paragraphs.len(),
        start = ?bounds.start,
        end = ?bounds.end,
        selected = range.len(),
        "located body"
    );

    Ok(emit::lines(&paragraphs[range]))
}

/// Load an etext from disk and extract its body lines
pub fn extract_file(
    path: &Path,
    markers: &Markers,
    policy: MarkerPolicy,
) -> Result<Vec<String>, EtextError> {
    let text = loader::load(path)?;
    let lines = extract_body(&text, markers, policy)?;
    tracing::info!(path = %path.display(), lines = lines.len(), "extracted body");
    Ok(lines)
}
