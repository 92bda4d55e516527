//! # Asma Data Crate
//!
//! This crate owns the names dataset end to end, minus the HTTP surface.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (NameRecord, CanonicalDataset, TransformReport)
//! - **parser**: Tolerant field extraction from the raw upstream export
//! - **transform**: The offline transformer that publishes the canonical file
//! - **dataset**: Canonical file serialization, writing, and loading
//! - **error**: Error types for transforming and loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use asma_data::{CanonicalDataset, Transformer};
//! use std::path::Path;
//!
//! // Offline: publish the canonical file
//! let report = Transformer::new("asma_al_husna.json", "api/names.json").run()?;
//!
//! // Online: load it once at startup
//! let dataset = CanonicalDataset::load_from(Path::new("api/names.json"))?;
//! println!("{} names loaded", dataset.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod transform;
pub mod dataset;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{CanonicalDataset, NameRecord, TransformReport};
pub use transform::{transform_document, Transformer, DEFAULT_SOURCE_PATH};
pub use dataset::DEFAULT_DATA_PATH;
