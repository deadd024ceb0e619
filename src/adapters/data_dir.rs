// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem data directory adapter.
//!
//! Resources are plain files directly inside a base directory. This is the
//! provider used when a caller points the loader at a directory of its own.

use crate::domain::{ConfigError, ResourceLocation, Result};
use crate::ports::ResourceProvider;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Maximum allowed size for a configuration resource (10MB).
const MAX_RESOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads resources from a directory on disk.
///
/// # Examples
///
/// ```rust
/// use monorepo::adapters::DataDirectory;
/// use monorepo::domain::ResourceLocation;
/// use monorepo::ports::ResourceProvider;
///
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::write(dir.path().join("demo.yaml"), "demo: 10\n").unwrap();
///
/// let data = DataDirectory::new(dir.path());
/// let location = ResourceLocation::new("demo.yaml").unwrap();
/// assert_eq!(data.read_to_string(&location).unwrap(), "demo: 10\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    /// Creates an adapter for resources inside `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Returns the base directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a location to its path inside the base directory.
    pub fn resolve(&self, location: &ResourceLocation) -> PathBuf {
        self.root.join(location)
    }

    fn unreadable(
        location: &ResourceLocation,
        message: String,
        source: Option<io::Error>,
    ) -> ConfigError {
        ConfigError::ResourceUnreadable {
            name: location.to_string(),
            message,
            source,
        }
    }
}

impl ResourceProvider for DataDirectory {
    fn name(&self) -> &str {
        "data-dir"
    }

    fn read_to_string(&self, location: &ResourceLocation) -> Result<String> {
        let path = self.resolve(location);
        tracing::debug!("Reading resource '{}' from {}", location, path.display());

        let file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::ResourceNotFound {
                name: location.to_string(),
                path: path.clone(),
            },
            _ => Self::unreadable(location, format!("failed to open: {}", e), Some(e)),
        })?;

        let metadata = file.metadata().map_err(|e| {
            Self::unreadable(location, format!("failed to read metadata: {}", e), Some(e))
        })?;

        if !metadata.is_file() {
            return Err(Self::unreadable(
                location,
                "not a regular file".to_string(),
                None,
            ));
        }

        if metadata.len() > MAX_RESOURCE_SIZE {
            return Err(Self::unreadable(
                location,
                format!(
                    "resource too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_RESOURCE_SIZE
                ),
                None,
            ));
        }

        let mut content = String::with_capacity(metadata.len() as usize);
        BufReader::new(file)
            .read_to_string(&mut content)
            .map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => Self::unreadable(
                    location,
                    "contents are not valid UTF-8".to_string(),
                    Some(e),
                ),
                _ => Self::unreadable(location, format!("failed to read: {}", e), Some(e)),
            })?;

        tracing::debug!("Read {} bytes from '{}'", content.len(), location);
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn location(name: &str) -> ResourceLocation {
        ResourceLocation::new(name).unwrap()
    }

    #[test]
    fn test_read_existing_resource() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("settings.yaml"), "key: value\n").unwrap();

        let data = DataDirectory::new(dir.path());
        let text = data.read_to_string(&location("settings.yaml")).unwrap();

        assert_eq!(text, "key: value\n");
        assert_eq!(data.name(), "data-dir");
    }

    #[test]
    fn test_resolve_joins_root() {
        let data = DataDirectory::new("/srv/app/data");
        assert_eq!(
            data.resolve(&location("demo.yaml")),
            PathBuf::from("/srv/app/data/demo.yaml")
        );
        assert_eq!(data.root(), Path::new("/srv/app/data"));
    }

    #[test]
    fn test_missing_resource() {
        let dir = TempDir::new().unwrap();
        let data = DataDirectory::new(dir.path());

        let err = data.read_to_string(&location("absent.yaml")).unwrap_err();
        match err {
            ConfigError::ResourceNotFound { name, path } => {
                assert_eq!(name, "absent.yaml");
                assert_eq!(path, dir.path().join("absent.yaml"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested.yaml")).unwrap();

        let data = DataDirectory::new(dir.path());
        let err = data.read_to_string(&location("nested.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ResourceUnreadable { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("latin1.yaml"), b"demo: \xe9t\xe9\n").unwrap();

        let data = DataDirectory::new(dir.path());
        let err = data.read_to_string(&location("latin1.yaml")).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_oversized_resource() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("huge.yaml");
        File::create(&path)
            .unwrap()
            .set_len(MAX_RESOURCE_SIZE + 1)
            .unwrap();

        let data = DataDirectory::new(dir.path());
        let err = data.read_to_string(&location("huge.yaml")).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
