// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed form of a configuration resource.

use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};
use std::collections::BTreeMap;

/// An in-memory configuration document.
///
/// A document is a mapping from unique string keys to [`ConfigValue`]s. Each
/// load produces a new, independently owned document; nothing is cached or
/// shared between loads, and a document is never mutated once built.
///
/// # Examples
///
/// ```
/// use monorepo::domain::{ConfigDocument, ConfigValue};
/// use std::collections::BTreeMap;
///
/// let mut entries = BTreeMap::new();
/// entries.insert("demo".to_string(), ConfigValue::Integer(10));
/// let document = ConfigDocument::new(entries);
///
/// assert_eq!(document.require("demo").unwrap(), &ConfigValue::Integer(10));
/// assert!(document.get("missing").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigDocument {
    entries: BTreeMap<String, ConfigValue>,
}

impl ConfigDocument {
    /// Creates a document from its top-level entries.
    pub fn new(entries: BTreeMap<String, ConfigValue>) -> Self {
        Self { entries }
    }

    /// Returns the value bound to a top-level key.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Returns the value bound to a top-level key, or `KeyNotFound`.
    pub fn require(&self, key: &str) -> Result<&ConfigValue> {
        self.get(key).ok_or_else(|| ConfigError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Looks up a nested value using dot notation.
    ///
    /// Each segment selects a mapping key, or an index when the current value
    /// is a sequence.
    ///
    /// ```
    /// use monorepo::domain::{ConfigDocument, ConfigValue};
    /// use std::collections::BTreeMap;
    ///
    /// let mut db = BTreeMap::new();
    /// db.insert("port".to_string(), ConfigValue::Integer(5432));
    /// let mut entries = BTreeMap::new();
    /// entries.insert("database".to_string(), ConfigValue::Mapping(db));
    ///
    /// let document = ConfigDocument::new(entries);
    /// assert_eq!(document.lookup("database.port"), Some(&ConfigValue::Integer(5432)));
    /// ```
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        let mut segments = path.split('.');
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                ConfigValue::Mapping(map) => map.get(segment)?,
                ConfigValue::Sequence(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Iterates over the top-level keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the document and returns its entries.
    pub fn into_inner(self) -> BTreeMap<String, ConfigValue> {
        self.entries
    }
}

impl From<BTreeMap<String, ConfigValue>> for ConfigDocument {
    fn from(entries: BTreeMap<String, ConfigValue>) -> Self {
        Self::new(entries)
    }
}
