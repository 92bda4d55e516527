//! # Lookup Service
//!
//! Read-only queries over the canonical dataset and the font table.
//!
//! The dataset is loaded exactly once, when the service is constructed. If
//! that load fails the service does not give up: it keeps the error message
//! and answers every data query with [`LookupError::DatasetUnavailable`]
//! until the process is restarted with a good file. The health probe keeps
//! answering either way, since it reports that the process is alive rather
//! than that the data is ready.
//!
//! Nothing here takes a lock. After construction nothing is ever written,
//! so handlers share one instance behind the router state's `Arc` and read
//! concurrently.

use std::path::Path;

use asma_data::{CanonicalDataset, NameRecord};
use serde::Serialize;
use tracing::{error, info};

use crate::error::{LookupError, LookupResult};
use crate::fonts::{DEFAULT_FONT_KEY, FontDescriptor, FontTable};

/// Version reported by the health probe
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of the one-time startup load
#[derive(Debug, Clone)]
pub enum DatasetState {
    Ready(CanonicalDataset),
    /// Load failed; holds the message reported to callers
    Unavailable(String),
}

/// Records annotated with the font metadata to render them with
#[derive(Debug, Clone, Serialize)]
pub struct NamesWithFont<'a> {
    /// The requested key, echoed verbatim even when it was not found
    pub font: String,
    pub font_name: &'a str,
    pub font_family: &'a str,
    pub font_url: &'a str,
    pub names: &'a [NameRecord],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// The lookup service
#[derive(Debug)]
pub struct NameLookup {
    dataset: DatasetState,
    fonts: FontTable,
}

impl NameLookup {
    pub fn new(dataset: DatasetState, fonts: FontTable) -> Self {
        Self { dataset, fonts }
    }

    /// Service over an already-loaded dataset
    pub fn with_dataset(dataset: CanonicalDataset, fonts: FontTable) -> Self {
        Self::new(DatasetState::Ready(dataset), fonts)
    }

    /// Load the canonical file once. Never fails; a bad file yields a
    /// service in the degraded state.
    pub fn load(path: &Path, fonts: FontTable) -> Self {
        let dataset = match CanonicalDataset::load_from(path) {
            Ok(dataset) => {
                info!("Loaded {} names from {}", dataset.len(), path.display());
                DatasetState::Ready(dataset)
            }
            Err(e) => {
                error!("Dataset unavailable, serving errors until restart: {}", e);
                DatasetState::Unavailable(e.to_string())
            }
        };
        Self::new(dataset, fonts)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.dataset, DatasetState::Ready(_))
    }

    fn dataset(&self) -> LookupResult<&CanonicalDataset> {
        match &self.dataset {
            DatasetState::Ready(dataset) => Ok(dataset),
            DatasetState::Unavailable(msg) => Err(LookupError::DatasetUnavailable(msg.clone())),
        }
    }

    /// Every record, in stored order
    pub fn all_names(&self) -> LookupResult<&[NameRecord]> {
        Ok(self.dataset()?.records())
    }

    /// Every record plus font metadata for `font` (default when `None`).
    ///
    /// An unknown key resolves to the default descriptor, but the response
    /// still carries the key exactly as requested. Clients key their own
    /// font loading on the echoed value.
    pub fn names_with_font(&self, font: Option<&str>) -> LookupResult<NamesWithFont<'_>> {
        let names = self.all_names()?;
        let requested = font.unwrap_or(DEFAULT_FONT_KEY);
        let descriptor: &FontDescriptor = self.fonts.resolve(requested);

        Ok(NamesWithFont {
            font: requested.to_string(),
            font_name: &descriptor.name,
            font_family: &descriptor.family,
            font_url: &descriptor.url,
            names,
        })
    }

    /// The full font table
    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    /// Liveness; independent of dataset state
    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok",
            version: SERVICE_VERSION,
        }
    }
}
