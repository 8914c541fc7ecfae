use std::collections::HashMap;

use super::SourceContext;

/// A use-site of a locale key in source code, e.g. `L.SELL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReference {
    pub key: String,
    pub context: SourceContext,
}

impl KeyReference {
    pub fn new(key: impl Into<String>, context: SourceContext) -> Self {
        Self {
            key: key.into(),
            context,
        }
    }
}

/// References grouped by key.
///
/// Keys iterate in the order they were first seen; each key's locations keep
/// the order they were recorded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyReferences {
    order: Vec<String>,
    by_key: HashMap<String, Vec<SourceContext>>,
}

impl KeyReferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, reference: KeyReference) {
        match self.by_key.get_mut(&reference.key) {
            Some(locations) => locations.push(reference.context),
            None => {
                self.order.push(reference.key.clone());
                self.by_key.insert(reference.key, vec![reference.context]);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[SourceContext]> {
        self.by_key.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

}

impl FromIterator<KeyReference> for KeyReferences {
    fn from_iter<I: IntoIterator<Item = KeyReference>>(iter: I) -> Self {
        let mut refs = Self::new();
        for reference in iter {
            refs.insert(reference);
        }
        refs
    }
}
