//! Working-directory helpers for the CLI integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub mod payload;

/// Creates a temporary directory for payload and configuration files.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// Writes `contents` to `name` inside `dir` and returns the file path.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents)
        .unwrap_or_else(|error| panic!("failed to write {}: {error}", path.display()));
    path
}
