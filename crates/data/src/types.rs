//! Core domain types for the names dataset.
//!
//! `NameRecord` is the canonical shape served by the API. A
//! `CanonicalDataset` is an ordered, immutable list of records: it is built
//! once (by the transformer or by loading the canonical file) and only ever
//! read afterwards.

use serde::{Deserialize, Serialize};

// =============================================================================
// Records
// =============================================================================

/// One of the names with its transliteration and English meaning.
///
/// Field names match the canonical file format exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Arabic text
    pub name: String,
    pub transliteration: String,
    pub meaning: String,
}

impl NameRecord {
    pub fn new(
        name: impl Into<String>,
        transliteration: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            transliteration: transliteration.into(),
            meaning: meaning.into(),
        }
    }

    /// Name of the first empty field, if any.
    pub fn first_empty_field(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            Some("name")
        } else if self.transliteration.is_empty() {
            Some("transliteration")
        } else if self.meaning.is_empty() {
            Some("meaning")
        } else {
            None
        }
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// Ordered list of validated name records.
///
/// Serialized transparently as a JSON array. There are no mutating methods;
/// once constructed the order and contents are fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalDataset {
    records: Vec<NameRecord>,
}

impl CanonicalDataset {
    pub fn new(records: Vec<NameRecord>) -> Self {
        Self { records }
    }

    /// All records in stored order
    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&NameRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a CanonicalDataset {
    type Item = &'a NameRecord;
    type IntoIter = std::slice::Iter<'a, NameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// =============================================================================
// Transform summary
// =============================================================================

/// Outcome of a transform run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformReport {
    /// Entries found under the source collection key
    pub total_entries: usize,
    /// Entries that became records
    pub kept: usize,
    /// Entries dropped for missing or empty fields
    pub dropped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_empty_field() {
        let full = NameRecord::new("الرحمن", "Ar Rahmaan", "The Beneficent");
        assert_eq!(full.first_empty_field(), None);

        let partial = NameRecord::new("الرحيم", "", "The Merciful");
        assert_eq!(partial.first_empty_field(), Some("transliteration"));
    }

    #[test]
    fn test_dataset_serializes_as_bare_array() {
        let dataset = CanonicalDataset::new(vec![NameRecord::new("الملك", "Al Malik", "The King")]);
        let value = serde_json::to_value(&dataset).unwrap();

        assert!(value.is_array());
        assert_eq!(value[0]["transliteration"], "Al Malik");
    }

    #[test]
    fn test_dataset_preserves_order() {
        let dataset = CanonicalDataset::new(vec![
            NameRecord::new("a", "A", "first"),
            NameRecord::new("b", "B", "second"),
        ]);

        let meanings: Vec<&str> = dataset.iter().map(|r| r.meaning.as_str()).collect();
        assert_eq!(meanings, vec!["first", "second"]);
        assert_eq!(dataset.get(1).map(|r| r.name.as_str()), Some("b"));
        assert!(dataset.get(2).is_none());
    }
}
