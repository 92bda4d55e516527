//! Reading and writing the canonical file.
//!
//! Format: a JSON array of `{name, transliteration, meaning}` objects,
//! UTF-8, indented by four spaces, with non-ASCII text left unescaped.

use crate::error::{DataLoadError, Result};
use crate::types::CanonicalDataset;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Conventional location of the canonical file, relative to the working dir
pub const DEFAULT_DATA_PATH: &str = "api/names.json";

impl CanonicalDataset {
    /// Serialize to the canonical text form.
    ///
    /// The output depends only on the records, so serializing the same
    /// dataset twice gives byte-identical text.
    pub fn to_canonical_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|e| DataLoadError::IoError(e.into()))?;
        buf.push(b'\n');

        // serde_json only ever emits valid UTF-8
        String::from_utf8(buf).map_err(|e| {
            DataLoadError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    /// Write the canonical file, creating parent directories as needed.
    ///
    /// The text goes to a sibling temp file first and is renamed into place,
    /// so readers never observe a half-written file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let text = self.to_canonical_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);

        let written = fs::write(&tmp_path, text).and_then(|()| fs::rename(&tmp_path, path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!("Wrote {} records to {}", self.len(), path.display());
        Ok(())
    }

    /// Load and validate a canonical file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => DataLoadError::IoError(e),
        })?;

        let dataset: CanonicalDataset =
            serde_json::from_str(&text).map_err(|source| DataLoadError::InvalidDocument {
                path: path.to_path_buf(),
                source,
            })?;

        dataset.validate()?;
        Ok(dataset)
    }

    /// Check that every record has all three fields populated
    pub fn validate(&self) -> Result<()> {
        for (idx, record) in self.iter().enumerate() {
            if let Some(field) = record.first_empty_field() {
                return Err(DataLoadError::ValidationError(format!(
                    "record {} has an empty '{}' field",
                    idx, field
                )));
            }
        }
        Ok(())
    }
}
