//! Common test utilities for integration tests.
//!
//! Helpers for laying out bundle directories on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary bundle directory.
///
/// The directory is removed when the value is dropped.
pub struct BundleDir {
    dir: TempDir,
}

#[allow(dead_code)]
impl BundleDir {
    /// Creates an empty bundle directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `contents` to `name` under the root and returns its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Builder-style variant of [`BundleDir::write`].
    pub fn with_file(self, name: &str, contents: &str) -> Self {
        self.write(name, contents);
        self
    }
}
