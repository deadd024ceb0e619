// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource provider trait definition.
//!
//! A `ResourceProvider` is where named configuration resources come from. The
//! loader receives one as an explicit dependency instead of resolving the
//! package data location on its own, so it can be pointed at any directory.

use crate::domain::{ResourceLocation, Result};

/// A trait for locating and reading named configuration resources.
///
/// # Examples
///
/// ```rust
/// use monorepo::domain::{ConfigError, ResourceLocation, Result};
/// use monorepo::ports::ResourceProvider;
///
/// struct Inline(&'static str);
///
/// impl ResourceProvider for Inline {
///     fn name(&self) -> &str {
///         "inline"
///     }
///
///     fn read_to_string(&self, location: &ResourceLocation) -> Result<String> {
///         match location.as_str() {
///             "demo.yaml" => Ok(self.0.to_string()),
///             other => Err(ConfigError::ResourceNotFound {
///                 name: other.to_string(),
///                 path: other.into(),
///             }),
///         }
///     }
/// }
///
/// let provider = Inline("demo: 10");
/// let location = ResourceLocation::new("demo.yaml").unwrap();
/// assert_eq!(provider.read_to_string(&location).unwrap(), "demo: 10");
/// ```
pub trait ResourceProvider {
    /// Returns a short name for the provider, used in logs.
    fn name(&self) -> &str;

    /// Reads the whole resource as UTF-8 text.
    ///
    /// # Errors
    ///
    /// * `ResourceNotFound` - The resource does not exist
    /// * `ResourceUnreadable` - It exists but could not be opened or decoded
    fn read_to_string(&self, location: &ResourceLocation) -> Result<String>;
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read_to_string(&self, location: &ResourceLocation) -> Result<String> {
        (**self).read_to_string(location)
    }
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read_to_string(&self, location: &ResourceLocation) -> Result<String> {
        (**self).read_to_string(location)
    }
}
