//! Post-processing and cleanup utilities
//!
//! Text helpers applied to extracted questions before they are rendered.

/// Collapse every whitespace run (newlines included) to a single space
/// and drop leading/trailing whitespace
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
