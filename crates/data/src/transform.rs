//! The offline transformer: raw export in, canonical file out.
//!
//! The run is all-or-nothing. The canonical file is only touched after the
//! source was read, parsed, and produced at least one record, so a missing
//! or reshaped upstream export can never replace a good dataset.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::{CanonicalDataset, TransformReport};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the raw upstream export
pub const DEFAULT_SOURCE_PATH: &str = "asma_al_husna.json";

/// Extract every complete entry from a parsed export, in source order.
///
/// Never fails: incomplete entries are dropped and counted in the report.
pub fn transform_document(doc: &Value) -> (CanonicalDataset, TransformReport) {
    let entries = parser::extract_entries(doc);

    let mut records = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        match parser::extract_record(entry) {
            Some(record) => records.push(record),
            None => debug!("Dropping incomplete entry at index {}", idx),
        }
    }

    let report = TransformReport {
        total_entries: entries.len(),
        kept: records.len(),
        dropped: entries.len() - records.len(),
    };

    (CanonicalDataset::new(records), report)
}

/// One transform run from a source file to a canonical file
#[derive(Debug, Clone)]
pub struct Transformer {
    input: PathBuf,
    output: PathBuf,
}

impl Transformer {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Read, extract, and publish.
    ///
    /// Returns the report on success. On any error the output file is left
    /// exactly as it was.
    pub fn run(&self) -> Result<TransformReport> {
        let (dataset, report) = self.build()?;

        dataset.write_to(&self.output)?;
        info!(
            "Successfully saved {} names to '{}'",
            dataset.len(),
            self.output.display()
        );

        Ok(report)
    }

    /// Everything `run` does except writing the output
    pub fn build(&self) -> Result<(CanonicalDataset, TransformReport)> {
        let bytes = std::fs::read(&self.input).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataLoadError::SourceNotFound {
                path: self.input.clone(),
            },
            _ => DataLoadError::IoError(e),
        })?;

        let doc = parser::parse_document(&bytes, &self.input)?;
        let (dataset, report) = transform_document(&doc);

        info!(
            "Extracted {} of {} entries from '{}' ({} dropped)",
            report.kept,
            report.total_entries,
            self.input.display(),
            report.dropped
        );

        if dataset.is_empty() {
            return Err(DataLoadError::EmptyResultSet {
                total_entries: report.total_entries,
            });
        }

        Ok((dataset, report))
    }
}
