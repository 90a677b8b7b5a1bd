//! Document loading and orchestration
//!
//! This module ties the specialised parsing steps together: it turns raw
//! HTML into a [`ParsedDocument`], and wraps reading plus parsing of a single
//! file into a [`ParseOutcome`] so faults stay attached to their document.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::io::DocumentSource;
use super::models::*;
use super::parsing::dom::parse_html;
use super::parsing::heading::detect_student_name;
use super::parsing::question::extract_questions;

/// Parse raw HTML text into a student's name and question list
///
/// The HTML tokenizer is error tolerant, so malformed markup yields a
/// best-effort result rather than a failure.
pub fn parse_document(html: &str, source: impl Into<PathBuf>) -> ParsedDocument {
    let dom = parse_html(html);

    let name = detect_student_name(&dom.document).unwrap_or_else(|| UNKNOWN_STUDENT.to_string());
    let questions = extract_questions(&dom.document);

    ParsedDocument {
        name,
        questions,
        source: source.into(),
    }
}

/// Read and parse a single document, keeping any fault attached to its path
pub fn load_document<S>(reader: &S, path: &Path) -> ParseOutcome
where
    S: DocumentSource + ?Sized,
{
    match reader.read(path) {
        Ok(html) => {
            let document = parse_document(&html, path);
            debug!(
                "Parsed {}: name={:?}, {} question(s)",
                path.display(),
                document.name,
                document.questions.len()
            );
            ParseOutcome::Parsed(document)
        }
        Err(error) => ParseOutcome::Failed {
            source: path.to_path_buf(),
            error,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::io::FsSource;
    use crate::error::QuexError;

    #[test]
    fn test_missing_file_becomes_failed_outcome() {
        let path = Path::new("tests/fixtures/sheets/missing.html");
        let outcome = load_document(&FsSource, path);

        assert_eq!(outcome.source(), path);
        assert!(matches!(
            outcome,
            ParseOutcome::Failed {
                error: QuexError::DocumentRead { .. },
                ..
            }
        ));
        assert!(outcome.is_failed());
        let document = outcome.into_document();
        assert_eq!(document.name, PARSE_ERROR_NAME);
        assert!(document.questions.is_empty());
    }

    #[test]
    fn test_fixture_loads() {
        let path = Path::new("tests/fixtures/sheets/01_jane.html");
        let ParseOutcome::Parsed(document) = load_document(&FsSource, path) else {
            panic!("fixture should parse");
        };
        assert_eq!(document.name, "Jane Doe");
        assert_eq!(document.questions.len(), 3);
    }
}
