//! Sequential batch processing of question documents
//!
//! Every input path yields exactly one [`ParsedDocument`]. Documents that
//! cannot be read are logged and replaced by a sentinel entry so the rest
//! of the batch still goes through.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::document::{BatchResult, DocumentSource, ParseOutcome, load_document};

/// Parse each document in the order given
pub fn run_batch<S>(reader: &S, paths: &[PathBuf]) -> BatchResult
where
    S: DocumentSource + ?Sized,
{
    let mut results = BatchResult::default();

    for path in paths {
        info!("Processing: {}", display_name(path));
        let outcome = load_document(reader, path);
        if let ParseOutcome::Failed { error, .. } = &outcome {
            error!(file = %outcome.source().display(), "{error}");
        }
        results.push_outcome(outcome);
    }

    results
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
