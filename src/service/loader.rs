// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader.
//!
//! The loader ties a [`ResourceProvider`] to a [`ConfigParser`]: it resolves a
//! resource name, reads the text and parses it into a fresh document.

use crate::domain::{ConfigDocument, ResourceLocation, Result};
use crate::ports::{ConfigParser, ResourceProvider};

#[cfg(feature = "yaml")]
use crate::adapters::{DataDirectory, EmbeddedResources, YamlParser};
#[cfg(feature = "yaml")]
use std::path::PathBuf;

/// Loads named configuration resources into [`ConfigDocument`]s.
///
/// Nothing is cached: every call to [`load`](ConfigLoader::load) reads and
/// parses the resource again and hands back a document the caller owns.
///
/// # Examples
///
/// ```rust
/// use monorepo::domain::ConfigValue;
/// use monorepo::service::ConfigLoader;
///
/// # fn main() -> monorepo::domain::Result<()> {
/// let loader = ConfigLoader::bundled();
/// let document = loader.load("demo.yaml")?;
/// assert_eq!(document.get("demo"), Some(&ConfigValue::Integer(10)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader<R, P> {
    provider: R,
    parser: P,
}

impl<R, P> ConfigLoader<R, P>
where
    R: ResourceProvider,
    P: ConfigParser,
{
    /// Creates a loader reading from `provider` and parsing with `parser`.
    pub fn new(provider: R, parser: P) -> Self {
        Self { provider, parser }
    }

    /// Returns the resource provider.
    pub fn provider(&self) -> &R {
        &self.provider
    }

    /// Loads and parses the resource named `filename`.
    ///
    /// # Errors
    ///
    /// * `InvalidResourceName` - `filename` is not a plain file name
    /// * `ResourceNotFound` / `ResourceUnreadable` - from the provider
    /// * `ParseError` - the contents are not well-formed
    pub fn load(&self, filename: &str) -> Result<ConfigDocument> {
        let location = ResourceLocation::new(filename)?;

        if let Some(extension) = location.extension() {
            if !self.parser.supports_extension(extension) {
                tracing::warn!(
                    "Resource '{}' has extension '{}', parser expects one of {:?}",
                    location,
                    extension,
                    self.parser.supported_extensions()
                );
            }
        }

        let content = self.provider.read_to_string(&location)?;
        let document = self.parser.parse(&content)?;

        tracing::debug!(
            "Loaded '{}' from {} ({} top-level keys)",
            location,
            self.provider.name(),
            document.len()
        );
        Ok(document)
    }
}

#[cfg(feature = "yaml")]
impl ConfigLoader<EmbeddedResources, YamlParser> {
    /// A YAML loader over the package's bundled `data/` directory, which is
    /// compiled into the binary.
    pub fn bundled() -> Self {
        Self::new(EmbeddedResources::bundled(), YamlParser::new())
    }
}

#[cfg(feature = "yaml")]
impl ConfigLoader<DataDirectory, YamlParser> {
    /// A YAML loader over an arbitrary data directory.
    pub fn with_data_dir<D: Into<PathBuf>>(dir: D) -> Self {
        Self::new(DataDirectory::new(dir), YamlParser::new())
    }
}
