// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded resource adapter.
//!
//! The package's `data/` directory is compiled into the binary, so bundled
//! resources are available wherever the binary runs.

use crate::domain::{ConfigError, ResourceLocation, Result};
use crate::ports::ResourceProvider;
use include_dir::{include_dir, Dir};
use std::path::Path;

static BUNDLED_DATA: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/data");

/// Reads resources from a directory embedded at compile time.
///
/// # Examples
///
/// ```rust
/// use monorepo::adapters::EmbeddedResources;
/// use monorepo::domain::ResourceLocation;
/// use monorepo::ports::ResourceProvider;
///
/// let data = EmbeddedResources::bundled();
/// let location = ResourceLocation::new("demo.yaml").unwrap();
/// assert!(data.read_to_string(&location).unwrap().contains("demo"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedResources {
    dir: &'static Dir<'static>,
}

impl EmbeddedResources {
    /// Wraps an embedded directory.
    pub fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }

    /// The package's bundled `data/` directory.
    pub fn bundled() -> Self {
        Self::new(&BUNDLED_DATA)
    }

    /// Names of the top-level files in the directory.
    pub fn file_names(&self) -> impl Iterator<Item = &'static str> {
        let dir: &'static Dir<'static> = self.dir;
        dir.files()
            .filter_map(|file| file.path().file_name().and_then(|name| name.to_str()))
    }
}

impl ResourceProvider for EmbeddedResources {
    fn name(&self) -> &str {
        "embedded"
    }

    fn read_to_string(&self, location: &ResourceLocation) -> Result<String> {
        let path = self.dir.path().join(location);
        tracing::debug!("Reading embedded resource '{}'", location);

        let file = self
            .dir
            .get_file(&path)
            .ok_or_else(|| ConfigError::ResourceNotFound {
                name: location.to_string(),
                path: Path::new("<embedded>").join(&path),
            })?;

        let content = file
            .contents_utf8()
            .ok_or_else(|| ConfigError::ResourceUnreadable {
                name: location.to_string(),
                message: "contents are not valid UTF-8".to_string(),
                source: None,
            })?;

        Ok(content.to_string())
    }
}
