// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Every failure in the load-and-lookup chain is represented here. None of them
//! are recovered locally; they travel unchanged to the process boundary.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use monorepo::domain::errors::ConfigError;
///
/// fn lookup() -> Result<i64, ConfigError> {
///     Err(ConfigError::KeyNotFound {
///         key: "demo".to_string(),
///     })
/// }
///
/// assert_eq!(
///     lookup().unwrap_err().to_string(),
///     "Configuration key not found: demo"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The resource name is not a single plain file name.
    #[error("Invalid resource name '{name}': {reason}")]
    InvalidResourceName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The named resource does not exist in the data directory.
    #[error("Configuration resource '{name}' not found at {}", .path.display())]
    ResourceNotFound {
        /// The logical resource name
        name: String,
        /// The resolved filesystem path
        path: PathBuf,
    },

    /// The resource exists but could not be read as UTF-8 text.
    #[error("Configuration resource '{name}' could not be read: {message}")]
    ResourceUnreadable {
        /// The logical resource name
        name: String,
        /// The error message
        message: String,
        /// The underlying I/O error, if any
        #[source]
        source: Option<std::io::Error>,
    },

    /// Failed to parse the resource contents.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The parsed document does not contain the requested key.
    #[error("Configuration key not found: {key}")]
    KeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// A value did not have the type the caller asserted.
    #[error("Configuration value for key '{key}' is {found}, expected {expected}")]
    TypeMismatch {
        /// The key being converted
        key: String,
        /// The expected value kind
        expected: &'static str,
        /// The kind actually found
        found: &'static str,
    },
}

impl ConfigError {
    /// Creates a `ParseError` with a message and no underlying cause.
    pub fn parse(message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            message: message.into(),
            source: None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_key_not_found_error() {
        let error = ConfigError::KeyNotFound {
            key: "demo".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration key not found: demo");
    }

    #[test]
    fn test_resource_not_found_error() {
        let error = ConfigError::ResourceNotFound {
            name: "demo.yaml".to_string(),
            path: PathBuf::from("/srv/data/demo.yaml"),
        };
        assert_eq!(
            error.to_string(),
            "Configuration resource 'demo.yaml' not found at /srv/data/demo.yaml"
        );
    }

    #[test]
    fn test_resource_unreadable_keeps_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ConfigError::ResourceUnreadable {
            name: "demo.yaml".to_string(),
            message: "permission denied".to_string(),
            source: Some(io_error),
        };
        assert!(error.to_string().contains("demo.yaml"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::parse("Invalid YAML");
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid YAML"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_type_mismatch_error() {
        let error = ConfigError::TypeMismatch {
            key: "demo".to_string(),
            expected: "integer",
            found: "string",
        };
        assert_eq!(
            error.to_string(),
            "Configuration value for key 'demo' is string, expected integer"
        );
    }

    #[test]
    fn test_invalid_resource_name_error() {
        let error = ConfigError::InvalidResourceName {
            name: "../demo.yaml".to_string(),
            reason: "path separators are not allowed",
        };
        assert!(error.to_string().contains("../demo.yaml"));
    }
}
