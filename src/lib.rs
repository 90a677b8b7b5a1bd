//! quex: Extract student names and questions from HTML question sheets
//!
//! This library reads a directory of HTML exports, pulls the student's name
//! and their free-text questions out of each one, and renders the result as
//! an indented bulleted report.

pub mod batch;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod report;

/// Report output formats
#[derive(clap::ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Indented bulleted text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

// Re-export commonly used types
pub use batch::run_batch;
pub use config::Config;
pub use document::{BatchResult, ParsedDocument, load_document, parse_document};
pub use error::QuexError;
pub use report::{format_report, render_report};
