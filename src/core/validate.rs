//! Cross-validation of defined keys against key references.

use std::collections::HashSet;

use crate::core::{LocaleDefinitions, KeyReferences};

/// Outcome of comparing the locale file with the source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Defined but never referenced, in definition order.
    pub unused: Vec<String>,
    /// Referenced but never defined, in first-reference order.
    pub undefined: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.unused.is_empty() && self.undefined.is_empty()
    }
}

pub fn validate(definitions: &LocaleDefinitions, references: &KeyReferences) -> ValidationResult {
    let defined: Vec<&str> = definitions.keys();
    let defined_set: HashSet<&str> = defined.iter().copied().collect();

    let unused = defined
        .iter()
        .filter(|key| !references.contains_key(key))
        .map(|key| key.to_string())
        .collect();

    let undefined = references
        .keys()
        .filter(|key| !defined_set.contains(key))
        .map(String::from)
        .collect();

    ValidationResult { unused, undefined }
}
