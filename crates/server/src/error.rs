//! Error types for the server crate.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the lookup service.
///
/// An unknown font key is deliberately not an error: it resolves to the
/// default descriptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The dataset failed to load at startup; sticky until restart
    #[error("{0}")]
    DatasetUnavailable(String),
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Errors surfaced to HTTP callers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Lookup(LookupError::DatasetUnavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Errors loading server configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Font table has no \"default\" entry")]
    MissingDefaultFont,
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
