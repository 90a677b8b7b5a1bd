//! File I/O operations and validation
//!
//! This module handles input directory validation, document discovery,
//! reading document text, and writing the finished report.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{QuexError, Result};

/// Default markup extensions picked up from the input directory
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Supplies raw document text for an identifier
pub trait DocumentSource {
    fn read(&self, path: &Path) -> Result<String>;
}

/// Reads documents from the local filesystem as UTF-8
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DocumentSource for FsSource {
    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| QuexError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Validates that the input path exists and is a directory
pub fn validate_input_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(QuexError::InputNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(QuexError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

/// List matching documents directly inside `dir`, sorted by path
///
/// Subdirectories and dotfiles are skipped. Extensions are compared
/// case-sensitively. An empty match is reported as `NoDocumentsFound`.
pub fn discover_documents<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> Result<Vec<PathBuf>> {
    validate_input_dir(dir)?;

    let entries = fs::read_dir(dir).map_err(|source| QuexError::InputRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || is_hidden(&path) {
            continue;
        }

        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        if extensions.iter().any(|allowed| allowed.as_ref() == extension) {
            debug!("Discovered {}", path.display());
            documents.push(path);
        }
    }

    if documents.is_empty() {
        return Err(QuexError::NoDocumentsFound(dir.to_path_buf()));
    }

    documents.sort();
    Ok(documents)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Write the rendered report, creating the parent directory when missing
pub fn write_report(output: &Path, report: &str) -> Result<()> {
    let to_error = |source: std::io::Error| QuexError::OutputWrite {
        path: output.to_path_buf(),
        source,
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(to_error)?;
        }
    }

    fs::write(output, report).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotfiles_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".draft.html"), "<p>draft</p>").unwrap();
        fs::write(dir.path().join("final.html"), "<p>final</p>").unwrap();

        let documents = discover_documents(dir.path(), &DEFAULT_EXTENSIONS).unwrap();
        assert_eq!(documents, vec![dir.path().join("final.html")]);
    }

    #[test]
    fn test_no_matching_documents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "nothing").unwrap();
        fs::write(dir.path().join(".hidden.htm"), "nothing").unwrap();

        let err = discover_documents(dir.path(), &DEFAULT_EXTENSIONS).unwrap_err();
        assert!(matches!(err, QuexError::NoDocumentsFound(ref path) if path == dir.path()));
        assert!(err.to_string().starts_with("No HTML files found in"));
    }

    #[test]
    fn test_directory_read_fault_is_an_input_error() {
        let err = QuexError::InputRead {
            path: PathBuf::from("sheets"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Cannot read directory sheets: denied");
    }
}
