// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A throwaway data directory standing in for the bundled one.
pub struct DataDirFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl DataDirFixture {
    /// Creates an empty data directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp data directory"),
        }
    }

    /// Creates a data directory holding `demo.yaml` with `content`.
    pub fn with_demo(content: &str) -> Self {
        Self::new().with_file("demo.yaml", content)
    }

    /// Adds a resource to the directory.
    pub fn with_file(self, name: &str, content: impl AsRef<[u8]>) -> Self {
        fs::write(self.dir.path().join(name), content).expect("Failed to write resource");
        self
    }

    /// Path of the directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
