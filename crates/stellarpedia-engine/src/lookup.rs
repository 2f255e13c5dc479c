//! Lookups the markup consults while rendering: localized strings and
//! application data referenced by path.

use std::collections::HashMap;

use serde_json::Value;

/// Prefix of the value returned for a localization key that does not exist.
pub const LOC_MISS_PREFIX: &str = "loc_miss:";

/// Prefix substituted for a `<dt>` reference that could not be resolved.
pub const DATA_MISS_PREFIX: &str = "data_miss::";

pub trait Localizer: Send + Sync {
    /// Returns the localized value for `key`.
    ///
    /// When `allow_missing` is false an unknown key yields a
    /// [`LOC_MISS_PREFIX`] sentinel instead of `None`.
    fn get_value(&self, key: &str, allow_missing: bool) -> Option<String>;
}

pub trait DataResolver: Send + Sync {
    fn data_from_path(&self, path: &str) -> Option<String>;
}

/// In-memory localization table.
#[derive(Debug, Default, Clone)]
pub struct MapLocalizer {
    values: HashMap<String, String>,
}

impl MapLocalizer {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl Localizer for MapLocalizer {
    fn get_value(&self, key: &str, allow_missing: bool) -> Option<String> {
        match self.values.get(key) {
            Some(value) => Some(value.clone()),
            None if allow_missing => None,
            None => Some(format!("{LOC_MISS_PREFIX}:{key}")),
        }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapLocalizer {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Resolves dot-separated paths (`character.attributes.str`) against a JSON
/// document. Array elements are addressed by index.
#[derive(Debug, Default, Clone)]
pub struct JsonDataResolver {
    root: Value,
}

impl JsonDataResolver {
    pub fn new(root: Value) -> Self {
        Self { root }
    }
}

impl DataResolver for JsonDataResolver {
    fn data_from_path(&self, path: &str) -> Option<String> {
        let mut current = &self.root;
        for segment in path.trim().split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        match current {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// A resolver that never finds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoData;

impl DataResolver for NoData {
    fn data_from_path(&self, _path: &str) -> Option<String> {
        None
    }
}
