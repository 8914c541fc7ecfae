use std::collections::HashSet;

use super::SourceLocation;

/// A key defined in the canonical locale file, e.g. `L["SELL"] = "Sell"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    pub key: String,
    /// Where the definition starts (column is always 1).
    pub location: SourceLocation,
}

impl LocaleEntry {
    pub fn new(key: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            key: key.into(),
            location,
        }
    }
}

/// All definitions read from one locale file, in file order.
///
/// Duplicate definitions are kept as they appear; `keys()` and `contains()`
/// treat the file as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDefinitions {
    pub file_path: String,
    pub entries: Vec<LocaleEntry>,
}

impl LocaleDefinitions {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: LocaleEntry) {
        self.entries.push(entry);
    }

    /// Unique keys in order of first definition.
    pub fn keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.key.as_str())
            .filter(|k| seen.insert(*k))
            .collect()
    }

    /// First definition of `key`.
    pub fn get(&self, key: &str) -> Option<&LocaleEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
