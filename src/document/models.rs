//! Core data structures for extracted question sets
//!
//! This module defines the public types produced by the parser and consumed
//! by the report formatter.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::QuexError;

/// Name used when neither the title nor the first heading carries a label
pub const UNKNOWN_STUDENT: &str = "Unknown Student";

/// Name used for documents that could not be read or parsed
pub const PARSE_ERROR_NAME: &str = "Error parsing file";

/// One student's question set, extracted from a single document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub name: String,
    pub questions: Vec<String>,
    pub source: PathBuf,
}

impl ParsedDocument {
    /// Placeholder emitted in place of a document that faulted
    pub fn sentinel(source: impl Into<PathBuf>) -> Self {
        Self {
            name: PARSE_ERROR_NAME.to_string(),
            questions: Vec::new(),
            source: source.into(),
        }
    }
}

/// Per-document result flowing from the parser into the batch runner
#[derive(Debug)]
pub enum ParseOutcome {
    Parsed(ParsedDocument),
    Failed { source: PathBuf, error: QuexError },
}

impl ParseOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ParseOutcome::Failed { .. })
    }

    pub fn source(&self) -> &Path {
        match self {
            ParseOutcome::Parsed(doc) => &doc.source,
            ParseOutcome::Failed { source, .. } => source,
        }
    }

    /// Collapse the outcome into a document, substituting the sentinel on failure
    pub fn into_document(self) -> ParsedDocument {
        match self {
            ParseOutcome::Parsed(doc) => doc,
            ParseOutcome::Failed { source, .. } => ParsedDocument::sentinel(source),
        }
    }
}

/// Ordered results of one batch run, one entry per input document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchResult {
    pub documents: Vec<ParsedDocument>,
    #[serde(skip)]
    failed: usize,
}

impl BatchResult {
    /// Append one outcome, substituting the sentinel for a failure
    pub fn push_outcome(&mut self, outcome: ParseOutcome) {
        if outcome.is_failed() {
            self.failed += 1;
        }
        self.documents.push(outcome.into_document());
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParsedDocument> {
        self.documents.iter()
    }

    /// Number of entries that stand in for documents that faulted
    pub fn failed_count(&self) -> usize {
        self.failed
    }
}

impl From<Vec<ParsedDocument>> for BatchResult {
    fn from(documents: Vec<ParsedDocument>) -> Self {
        Self {
            documents,
            failed: 0,
        }
    }
}

impl<'a> IntoIterator for &'a BatchResult {
    type Item = &'a ParsedDocument;
    type IntoIter = std::slice::Iter<'a, ParsedDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
