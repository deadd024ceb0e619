// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logical names of bundled configuration resources.

use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::path::{Component, Path};

/// A validated, package-relative resource name such as `demo.yaml`.
///
/// Only a single plain file name is accepted. Paths, traversal components
/// and absolute names are rejected, so a location can never resolve outside
/// the data directory it is joined onto.
///
/// # Examples
///
/// ```
/// use monorepo::domain::ResourceLocation;
///
/// let location = ResourceLocation::new("demo.yaml").unwrap();
/// assert_eq!(location.as_str(), "demo.yaml");
/// assert_eq!(location.extension(), Some("yaml"));
///
/// assert!(ResourceLocation::new("../demo.yaml").is_err());
/// assert!(ResourceLocation::new("/etc/passwd").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceLocation(String);

impl ResourceLocation {
    /// Validates `name` and wraps it.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let reject = |reason| ConfigError::InvalidResourceName {
            name: name.clone(),
            reason,
        };

        if name.is_empty() {
            return Err(reject("name is empty"));
        }
        if name.contains(['/', '\\']) {
            return Err(reject("path separators are not allowed"));
        }
        if name.contains('\0') {
            return Err(reject("NUL bytes are not allowed"));
        }

        let mut components = Path::new(&name).components();
        let plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !plain {
            return Err(reject("only a plain file name is allowed"));
        }

        Ok(ResourceLocation(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the file extension, if any.
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.0).extension().and_then(|ext| ext.to_str())
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ResourceLocation {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}
