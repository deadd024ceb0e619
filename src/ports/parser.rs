// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns the text of a
//! configuration resource into a [`ConfigDocument`].

use crate::domain::{ConfigDocument, Result};

/// A trait for parsing configuration text.
///
/// Implementations must parse the full content and either return a complete
/// document or fail; partial results are never returned.
///
/// # Examples
///
/// ```rust
/// use monorepo::domain::{ConfigDocument, ConfigValue, Result};
/// use monorepo::ports::ConfigParser;
/// use std::collections::BTreeMap;
///
/// struct KeyValueParser;
///
/// impl ConfigParser for KeyValueParser {
///     fn parse(&self, content: &str) -> Result<ConfigDocument> {
///         let entries: BTreeMap<_, _> = content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.to_string(), ConfigValue::from(v)))
///             .collect();
///         Ok(ConfigDocument::new(entries))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
///
/// let document = KeyValueParser.parse("demo=10").unwrap();
/// assert_eq!(document.get("demo"), Some(&ConfigValue::from("10")));
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a document.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigDocument)` - The parsed configuration
    /// * `Err(ConfigError::ParseError)` - The content is not well-formed
    fn parse(&self, content: &str) -> Result<ConfigDocument>;

    /// Returns the file extensions supported by this parser, without the
    /// leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if `extension` is one of the supported extensions.
    fn supports_extension(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfigError, ConfigValue};
    use std::collections::BTreeMap;

    struct TestParser;

    impl ConfigParser for TestParser {
        fn parse(&self, content: &str) -> Result<ConfigDocument> {
            if content.is_empty() {
                return Err(ConfigError::parse("empty"));
            }
            let mut map = BTreeMap::new();
            map.insert("test".to_string(), ConfigValue::from(content));
            Ok(ConfigDocument::new(map))
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let document = TestParser.parse("value").unwrap();
        assert_eq!(document.get("test"), Some(&ConfigValue::from("value")));
    }

    #[test]
    fn test_parser_parse_error() {
        assert!(matches!(
            TestParser.parse(""),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_supports_extension() {
        assert!(TestParser.supports_extension("tst"));
        assert!(TestParser.supports_extension("TEST"));
        assert!(!TestParser.supports_extension("yaml"));
    }
}
