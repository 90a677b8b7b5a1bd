//! Report rendering
//!
//! The text report is a bulleted list: one top-level bullet per student,
//! one indented bullet per question, and a blank line after each student.

use anyhow::Result;

use crate::ReportFormat;
use crate::document::BatchResult;
use crate::document::cleanup::normalize_whitespace;

const QUESTION_INDENT: &str = "    ";

/// Render the batch as the indented bulleted text report
pub fn format_report(results: &BatchResult) -> String {
    let mut lines = Vec::new();

    for document in results {
        lines.push(format!("- {}", document.name));

        for (index, question) in document.questions.iter().enumerate() {
            lines.push(format!(
                "{QUESTION_INDENT}- Question {}: {}",
                index + 1,
                normalize_whitespace(question)
            ));
        }

        // Blank line between students
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render the batch as pretty-printed JSON
pub fn format_json(results: &BatchResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

pub fn render_report(results: &BatchResult, format: &ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(format_report(results)),
        ReportFormat::Json => format_json(results),
    }
}
