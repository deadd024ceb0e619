// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML parser adapter.
//!
//! This module converts YAML text into a [`ConfigDocument`], keeping the full
//! nested structure and the scalar types YAML resolves.

use crate::domain::{ConfigDocument, ConfigError, ConfigValue, Result};
use crate::ports::ConfigParser;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// YAML parser implementation.
///
/// The top level of a document must be a mapping. An empty document (or one
/// holding only comments) parses to an empty [`ConfigDocument`].
///
/// Mapping keys that are scalars (numbers, booleans, null) are converted to
/// their string form; sequences or mappings used as keys are rejected. Tags
/// are ignored and the tagged value is used as-is.
///
/// # Examples
///
/// ```rust
/// use monorepo::adapters::YamlParser;
/// use monorepo::domain::ConfigValue;
/// use monorepo::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let document = parser.parse("demo: 10\nname: example").unwrap();
/// assert_eq!(document.get("demo"), Some(&ConfigValue::Integer(10)));
/// assert_eq!(document.get("name"), Some(&ConfigValue::from("example")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    fn convert(value: Value, path: &str) -> Result<ConfigValue> {
        Ok(match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ConfigValue::Integer(i)
                } else if n.is_u64() {
                    return Err(ConfigError::parse(format!(
                        "integer {} at '{}' is out of range",
                        n,
                        display_path(path)
                    )));
                } else {
                    // every serde_yaml number is representable as f64
                    ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => ConfigValue::String(s),
            Value::Sequence(items) => ConfigValue::Sequence(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| Self::convert(item, &join_path(path, &i.to_string())))
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Mapping(map) => {
                let mut entries = BTreeMap::new();
                for (key, val) in map {
                    let key = Self::key_to_string(key, path)?;
                    let val = Self::convert(val, &join_path(path, &key))?;
                    if entries.insert(key.clone(), val).is_some() {
                        return Err(ConfigError::parse(format!(
                            "duplicate key '{}'",
                            join_path(path, &key)
                        )));
                    }
                }
                ConfigValue::Mapping(entries)
            }
            Value::Tagged(tagged) => Self::convert(tagged.value, path)?,
        })
    }

    fn key_to_string(key: Value, path: &str) -> Result<String> {
        match key {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Ok("null".to_string()),
            Value::Tagged(tagged) => Self::key_to_string(tagged.value, path),
            Value::Sequence(_) | Value::Mapping(_) => Err(ConfigError::parse(format!(
                "non-scalar mapping key under '{}'",
                display_path(path)
            ))),
        }
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<ConfigDocument> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })?;

        match Self::convert(value, "")? {
            ConfigValue::Mapping(entries) => Ok(ConfigDocument::new(entries)),
            ConfigValue::Null => Ok(ConfigDocument::default()),
            other => Err(ConfigError::parse(format!(
                "top-level value must be a mapping, found {}",
                other.kind()
            ))),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
