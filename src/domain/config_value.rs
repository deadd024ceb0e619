// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynamically typed configuration values.
//!
//! A parsed configuration document has no fixed schema, so every value is one
//! of the kinds a structured-text format can produce. Callers assert the kind
//! they need at the point of use.

use crate::domain::errors::{ConfigError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A configuration value of any kind the parser can produce.
///
/// # Examples
///
/// ```
/// use monorepo::domain::ConfigValue;
///
/// let value = ConfigValue::Integer(10);
/// assert_eq!(value.as_i64(), Some(10));
/// assert_eq!(value.kind(), "integer");
/// assert_eq!(value.to_string(), "10");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// An explicit null or an empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Sequence(Vec<ConfigValue>),
    /// A nested mapping with unique string keys.
    Mapping(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Returns the name of this value's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Mapping(_) => "mapping",
        }
    }

    /// Returns `true` if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Returns the boolean, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number as a float. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Asserts that the value is a boolean.
    pub fn expect_bool(&self, key: &str) -> Result<bool> {
        self.as_bool().ok_or_else(|| self.mismatch(key, "boolean"))
    }

    /// Asserts that the value is an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use monorepo::domain::{ConfigError, ConfigValue};
    ///
    /// assert_eq!(ConfigValue::Integer(10).expect_i64("demo").unwrap(), 10);
    ///
    /// let err = ConfigValue::from("ten").expect_i64("demo").unwrap_err();
    /// assert!(matches!(err, ConfigError::TypeMismatch { found: "string", .. }));
    /// ```
    pub fn expect_i64(&self, key: &str) -> Result<i64> {
        self.as_i64().ok_or_else(|| self.mismatch(key, "integer"))
    }

    /// Asserts that the value is numeric and returns it as a float.
    pub fn expect_f64(&self, key: &str) -> Result<f64> {
        self.as_f64().ok_or_else(|| self.mismatch(key, "float"))
    }

    /// Asserts that the value is a string.
    pub fn expect_str(&self, key: &str) -> Result<&str> {
        match self {
            ConfigValue::String(s) => Ok(s),
            _ => Err(self.mismatch(key, "string")),
        }
    }

    /// Asserts that the value is a sequence.
    pub fn expect_sequence(&self, key: &str) -> Result<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(items) => Ok(items),
            _ => Err(self.mismatch(key, "sequence")),
        }
    }

    /// Asserts that the value is a mapping.
    pub fn expect_mapping(&self, key: &str) -> Result<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Mapping(map) => Ok(map),
            _ => Err(self.mismatch(key, "mapping")),
        }
    }

    fn mismatch(&self, key: &str, expected: &'static str) -> ConfigError {
        ConfigError::TypeMismatch {
            key: key.to_string(),
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => f.write_str("null"),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(n) => write!(f, "{}", n),
            ConfigValue::Float(x) => {
                if x.is_nan() {
                    f.write_str(".nan")
                } else if x.is_infinite() {
                    f.write_str(if *x > 0.0 { ".inf" } else { "-.inf" })
                } else if x.fract() == 0.0 {
                    // keep floats distinguishable from integers
                    write!(f, "{:.1}", x)
                } else {
                    write!(f, "{}", x)
                }
            }
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            ConfigValue::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Integer(n)
    }
}

impl From<f64> for ConfigValue {
    fn from(x: f64) -> Self {
        ConfigValue::Float(x)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(ConfigValue::Null.kind(), "null");
        assert_eq!(ConfigValue::from(true).kind(), "boolean");
        assert_eq!(ConfigValue::from(1).kind(), "integer");
        assert_eq!(ConfigValue::from(1.5).kind(), "float");
        assert_eq!(ConfigValue::from("x").kind(), "string");
        assert_eq!(ConfigValue::Sequence(vec![]).kind(), "sequence");
        assert_eq!(ConfigValue::Mapping(BTreeMap::new()).kind(), "mapping");
    }

    #[test]
    fn test_accessors_do_not_coerce() {
        let value = ConfigValue::from("10");
        assert_eq!(value.as_str(), Some("10"));
        assert_eq!(value.as_i64(), None);
        assert_eq!(value.as_f64(), None);
    }

    #[test]
    fn test_integer_widens_to_float() {
        assert_eq!(ConfigValue::from(3).as_f64(), Some(3.0));
        assert_eq!(ConfigValue::from(3.5).as_i64(), None);
    }

    #[test]
    fn test_expect_mismatch_reports_kinds() {
        let err = ConfigValue::Null.expect_str("name").unwrap_err();
        match err {
            ConfigError::TypeMismatch {
                key,
                expected,
                found,
            } => {
                assert_eq!(key, "name");
                assert_eq!(expected, "string");
                assert_eq!(found, "null");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_expect_success() {
        assert!(ConfigValue::from(true).expect_bool("flag").unwrap());
        assert_eq!(ConfigValue::from("a").expect_str("s").unwrap(), "a");
        assert_eq!(ConfigValue::from(2.5).expect_f64("f").unwrap(), 2.5);
        assert!(ConfigValue::Sequence(vec![])
            .expect_sequence("seq")
            .unwrap()
            .is_empty());
        assert!(ConfigValue::Mapping(BTreeMap::new())
            .expect_mapping("map")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(ConfigValue::from(10).to_string(), "10");
        assert_eq!(ConfigValue::from(-3).to_string(), "-3");
        assert_eq!(ConfigValue::from(1.0).to_string(), "1.0");
        assert_eq!(ConfigValue::from(2.5).to_string(), "2.5");
        assert_eq!(ConfigValue::from(f64::INFINITY).to_string(), ".inf");
        assert_eq!(ConfigValue::from(f64::NEG_INFINITY).to_string(), "-.inf");
        assert_eq!(ConfigValue::from(f64::NAN).to_string(), ".nan");
        assert_eq!(ConfigValue::from(false).to_string(), "false");
        assert_eq!(ConfigValue::Null.to_string(), "null");
        assert_eq!(ConfigValue::from("hello").to_string(), "hello");
    }

    #[test]
    fn test_display_collections() {
        let mut inner = BTreeMap::new();
        inner.insert("b".to_string(), ConfigValue::from(2));
        inner.insert("a".to_string(), ConfigValue::from("x"));
        let value = ConfigValue::Sequence(vec![
            ConfigValue::from(1),
            ConfigValue::Mapping(inner),
        ]);
        assert_eq!(value.to_string(), "[1, {a: x, b: 2}]");
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_serialize_untagged() {
        let value = ConfigValue::Sequence(vec![ConfigValue::from(1), ConfigValue::Null]);
        let yaml = serde_yaml::to_string(&value).unwrap();
        assert_eq!(yaml.trim(), "- 1\n- null");
    }
}
