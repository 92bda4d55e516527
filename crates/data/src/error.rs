//! Error types for the asma-data crate.
//!
//! The transformer and the canonical loader share one error enum so the
//! CLI and the server can report both through the same `Display` output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while transforming a raw export or loading the
/// canonical dataset.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The raw upstream export could not be found
    #[error("Input file '{}' not found", path.display())]
    SourceNotFound { path: PathBuf },

    /// The raw upstream export is not valid JSON
    #[error("Input file '{}' is not a valid JSON document: {source}", path.display())]
    SourceUnparseable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Extraction produced nothing worth publishing
    ///
    /// Raised instead of writing an empty canonical file, which would
    /// silently replace a good dataset after an upstream reshape.
    #[error("No valid entries found in {total_entries} source entries; refusing to write output")]
    EmptyResultSet { total_entries: usize },

    /// The canonical file is missing
    #[error("Data file not found at {}. Please ensure it exists.", path.display())]
    FileNotFound { path: PathBuf },

    /// The canonical file exists but does not decode as a list of name records
    #[error("Error decoding JSON data in {}: {source}", path.display())]
    InvalidDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A canonical record failed validation
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
