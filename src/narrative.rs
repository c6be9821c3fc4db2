//! Section Splitter: pulls the report body out of a raw model response.

use crate::markers::{section_between, NARRATIVE_END, NARRATIVE_START};
use log::debug;

/// Extracts the narrative region from a raw model response.
///
/// When both markers are present in order, returns the trimmed text strictly
/// between them. When either marker is missing (or the pair is reordered),
/// returns the input unchanged so a response lacking the expected scaffolding
/// still surfaces something to the operator.
///
/// A missing marker is a degraded-fidelity outcome, not an error; this
/// function never fails.
pub fn extract_narrative(raw: &str) -> &str {
    match section_between(raw, NARRATIVE_START, NARRATIVE_END) {
        Some(body) => body.trim(),
        None => {
            debug!("narrative markers absent, falling back to raw response");
            raw
        }
    }
}
