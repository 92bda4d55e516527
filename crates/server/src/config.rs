//! Settings for running the HTTP service.

use std::net::SocketAddr;
use std::path::PathBuf;

use asma_data::DEFAULT_DATA_PATH;

use crate::error::ConfigResult;
use crate::fonts::FontTable;

/// Default listen address
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Canonical dataset, loaded once at startup
    pub data_file: PathBuf,
    pub bind: SocketAddr,
    /// Alternate font table; the built-in table is used when unset
    pub fonts_file: Option<PathBuf>,
}

impl ServerConfig {
    /// The font table this configuration selects
    pub fn font_table(&self) -> ConfigResult<FontTable> {
        match &self.fonts_file {
            Some(path) => FontTable::from_file(path),
            None => Ok(FontTable::builtin()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_PATH),
            bind: SocketAddr::from(([0, 0, 0, 0], 8000)),
            fonts_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_file, PathBuf::from("api/names.json"));
        assert_eq!(config.font_table().unwrap(), FontTable::builtin());
    }

    #[test]
    fn test_missing_fonts_file_is_an_error() {
        let config = ServerConfig {
            fonts_file: Some(PathBuf::from("/nonexistent/fonts.json")),
            ..ServerConfig::default()
        };
        assert!(config.font_table().is_err());
    }
}
