//! Font descriptor table.
//!
//! Presentation metadata only: which stylesheet to pull and which CSS
//! family to apply when rendering the Arabic text. The built-in table is
//! versioned with this crate; a deployment that wants a different set of
//! fonts points `--fonts` at a JSON file of the same shape instead.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Key used when the caller does not ask for a font, and the fallback for
/// keys that are not in the table.
pub const DEFAULT_FONT_KEY: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Human-readable display name
    pub name: String,
    /// Value for the CSS `font-family` property
    pub family: String,
    /// Stylesheet that provides the font face
    pub url: String,
}

impl FontDescriptor {
    fn new(name: &str, family: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            family: family.to_string(),
            url: url.to_string(),
        }
    }
}

/// Font key -> descriptor, always containing [`DEFAULT_FONT_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FontTable {
    fonts: BTreeMap<String, FontDescriptor>,
}

impl FontTable {
    /// Build a table, rejecting one without a default entry
    pub fn new(fonts: BTreeMap<String, FontDescriptor>) -> ConfigResult<Self> {
        if !fonts.contains_key(DEFAULT_FONT_KEY) {
            return Err(ConfigError::MissingDefaultFont);
        }
        Ok(Self { fonts })
    }

    /// The table shipped with the service
    pub fn builtin() -> Self {
        let entries = [
            (
                DEFAULT_FONT_KEY,
                FontDescriptor::new(
                    "Amiri",
                    "'Amiri', serif",
                    "https://fonts.googleapis.com/css2?family=Amiri&display=swap",
                ),
            ),
            (
                "scheherazade",
                FontDescriptor::new(
                    "Scheherazade New",
                    "'Scheherazade New', serif",
                    "https://fonts.googleapis.com/css2?family=Scheherazade+New&display=swap",
                ),
            ),
            (
                "lateef",
                FontDescriptor::new(
                    "Lateef",
                    "'Lateef', serif",
                    "https://fonts.googleapis.com/css2?family=Lateef&display=swap",
                ),
            ),
            (
                "noto_naskh",
                FontDescriptor::new(
                    "Noto Naskh Arabic",
                    "'Noto Naskh Arabic', serif",
                    "https://fonts.googleapis.com/css2?family=Noto+Naskh+Arabic&display=swap",
                ),
            ),
            (
                "reem_kufi",
                FontDescriptor::new(
                    "Reem Kufi",
                    "'Reem Kufi', sans-serif",
                    "https://fonts.googleapis.com/css2?family=Reem+Kufi&display=swap",
                ),
            ),
            (
                "aref_ruqaa",
                FontDescriptor::new(
                    "Aref Ruqaa",
                    "'Aref Ruqaa', serif",
                    "https://fonts.googleapis.com/css2?family=Aref+Ruqaa&display=swap",
                ),
            ),
        ];

        Self {
            fonts: entries
                .into_iter()
                .map(|(key, descriptor)| (key.to_string(), descriptor))
                .collect(),
        }
    }

    /// Load a table from a JSON file shaped `{key: {name, family, url}}`
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let fonts: BTreeMap<String, FontDescriptor> =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(fonts)
    }

    pub fn get(&self, key: &str) -> Option<&FontDescriptor> {
        self.fonts.get(key)
    }

    pub fn default_descriptor(&self) -> &FontDescriptor {
        // `new` and `builtin` both guarantee the default entry
        &self.fonts[DEFAULT_FONT_KEY]
    }

    /// Descriptor for `key`, or the default descriptor if the key is unknown
    pub fn resolve(&self, key: &str) -> &FontDescriptor {
        self.get(key).unwrap_or_else(|| self.default_descriptor())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl Default for FontTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_default() {
        let table = FontTable::builtin();
        assert!(table.get(DEFAULT_FONT_KEY).is_some());
        assert_eq!(table.default_descriptor().name, "Amiri");
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        let table = FontTable::builtin();
        assert_eq!(table.resolve("nonexistent"), table.default_descriptor());
        assert_eq!(table.resolve("lateef").name, "Lateef");
    }

    #[test]
    fn test_table_without_default_rejected() {
        let mut fonts = BTreeMap::new();
        fonts.insert(
            "only".to_string(),
            FontDescriptor::new("Only", "'Only'", "https://example.com/only.css"),
        );
        assert!(matches!(
            FontTable::new(fonts),
            Err(ConfigError::MissingDefaultFont)
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts.json");
        std::fs::write(
            &path,
            r#"{
                "default": { "name": "Amiri", "family": "'Amiri', serif", "url": "https://a" },
                "kufi": { "name": "Reem Kufi", "family": "'Reem Kufi'", "url": "https://k" }
            }"#,
        )
        .unwrap();

        let table = FontTable::from_file(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("kufi").url, "https://k");
    }
}
