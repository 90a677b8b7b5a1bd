//! Student name detection
//!
//! The name is carried in a "Questions MM/DD: NAME" label, either in the
//! document `<title>` or in the first `<h1>`. The title wins when both match.

use markup5ever_rcdom::Handle;
use once_cell::sync::Lazy;
use regex::Regex;

use super::dom::{find_first, text_content};

// Case-sensitive "Questions", whitespace-flexible, unanchored
static QUESTIONS_LABEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Questions\s+\d+/\d+:\s*(.+)").unwrap());

/// Extract the label following a "Questions MM/DD:" prefix
///
/// Returns `None` when the pattern does not match or the captured label
/// is empty after trimming.
pub(crate) fn extract_label(text: &str) -> Option<String> {
    let captures = QUESTIONS_LABEL_PATTERN.captures(text.trim())?;
    let label = captures.get(1)?.as_str().trim();
    if label.is_empty() {
        return None;
    }
    Some(label.to_string())
}

/// Look up the student name in the title, then in the first heading
pub(crate) fn detect_student_name(root: &Handle) -> Option<String> {
    ["title", "h1"]
        .iter()
        .filter_map(|tag| find_first(root, tag))
        .find_map(|element| extract_label(&text_content(&element)))
}
