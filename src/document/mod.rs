//! Document parsing and data structures module
//!
//! This module provides functionality for reading HTML question sheets and
//! converting them into a structured representation.

pub(crate) mod cleanup;
pub mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

// Re-export all models and the loading entry points
pub use io::{DocumentSource, FsSource, discover_documents, validate_input_dir, write_report};
pub use loader::{load_document, parse_document};
pub use models::*;
