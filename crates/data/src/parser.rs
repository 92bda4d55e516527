//! Field extraction from the raw upstream export.
//!
//! The upstream document looks roughly like:
//!
//! ```text
//! { "data": [ { "name": "...", "transliteration": "...",
//!               "en": { "meaning": "..." }, ... }, ... ] }
//! ```
//!
//! None of that is trusted. Every lookup goes through `Value::get`, which
//! returns `None` for a missing key *and* for a container of the wrong type,
//! so a malformed entry can only ever be skipped, never abort the run.

use crate::error::{DataLoadError, Result};
use crate::types::NameRecord;
use serde_json::Value;
use std::path::Path;

/// Top-level key holding the entry collection
pub const ENTRIES_KEY: &str = "data";

/// Sub-object holding the English-locale view of an entry
pub const ENGLISH_KEY: &str = "en";

/// Parse raw export bytes into a JSON document.
///
/// Bytes that are not valid UTF-8 fail here as unparseable, like any other
/// malformed JSON.
pub fn parse_document(bytes: &[u8], path: &Path) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|source| DataLoadError::SourceUnparseable {
        path: path.to_path_buf(),
        source,
    })
}

/// Entries under the top-level collection key.
///
/// A missing key, a non-object document, or a non-array collection all
/// yield an empty slice.
pub fn extract_entries(doc: &Value) -> &[Value] {
    doc.get(ENTRIES_KEY)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Build a record from one raw entry, or `None` if any field is absent.
pub fn extract_record(entry: &Value) -> Option<NameRecord> {
    let name = text_field(entry, "name")?;
    let transliteration = text_field(entry, "transliteration")?;
    let meaning = entry
        .get(ENGLISH_KEY)
        .and_then(|en| text_field(en, "meaning"))?;

    Some(NameRecord::new(name, transliteration, meaning))
}

/// A field counts as present only when it is a non-empty string
fn text_field<'a>(container: &'a Value, key: &str) -> Option<&'a str> {
    container
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_complete_entry() {
        let entry = json!({
            "name": "الرحمن",
            "transliteration": "Ar Rahmaan",
            "number": 1,
            "en": { "meaning": "The Beneficent" }
        });

        let record = extract_record(&entry).unwrap();
        assert_eq!(record.name, "الرحمن");
        assert_eq!(record.transliteration, "Ar Rahmaan");
        assert_eq!(record.meaning, "The Beneficent");
    }

    #[test]
    fn test_missing_fields_yield_none() {
        assert!(extract_record(&json!({ "transliteration": "x", "en": { "meaning": "y" } })).is_none());
        assert!(extract_record(&json!({ "name": "x", "en": { "meaning": "y" } })).is_none());
        assert!(extract_record(&json!({ "name": "x", "transliteration": "y" })).is_none());
        assert!(extract_record(&json!({ "name": "x", "transliteration": "y", "en": {} })).is_none());
    }

    #[test]
    fn test_wrong_typed_containers_yield_none() {
        assert!(extract_record(&json!("just a string")).is_none());
        assert!(extract_record(&json!(null)).is_none());
        assert!(extract_record(&json!({ "name": "x", "transliteration": "y", "en": "meaning" })).is_none());
        assert!(extract_record(&json!({ "name": "x", "transliteration": "y", "en": [ { "meaning": "z" } ] })).is_none());
    }

    #[test]
    fn test_empty_and_non_string_fields_yield_none() {
        assert!(extract_record(&json!({ "name": "", "transliteration": "y", "en": { "meaning": "z" } })).is_none());
        assert!(extract_record(&json!({ "name": "x", "transliteration": 7, "en": { "meaning": "z" } })).is_none());
        assert!(extract_record(&json!({ "name": "x", "transliteration": "y", "en": { "meaning": null } })).is_none());
    }

    #[test]
    fn test_extract_entries_tolerates_odd_shapes() {
        assert!(extract_entries(&json!({})).is_empty());
        assert!(extract_entries(&json!([1, 2, 3])).is_empty());
        assert!(extract_entries(&json!({ "data": { "name": "x" } })).is_empty());
        assert_eq!(extract_entries(&json!({ "data": [1, {}] })).len(), 2);
    }

    #[test]
    fn test_parse_document_reports_path() {
        let err = parse_document(b"{ not json", Path::new("raw.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::SourceUnparseable { .. }));
        assert!(err.to_string().contains("raw.json"));
    }

    #[test]
    fn test_parse_document_rejects_invalid_utf8() {
        let err = parse_document(b"{\"data\": [\xff\xfe]}", Path::new("raw.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::SourceUnparseable { .. }));
    }
}
