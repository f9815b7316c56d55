//! Shared test utilities.

use std::path::{Path, PathBuf};

use git2::Repository;
use tempfile::TempDir;

/// Initialises a repository in a fresh temporary directory with `origin`
/// pointing at `origin_url`.
///
/// # Panics
///
/// Panics if the directory or repository cannot be created.
pub fn init_checkout(origin_url: &str) -> TempDir {
    let temp_dir =
        TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"));
    let repo = Repository::init(temp_dir.path())
        .unwrap_or_else(|error| panic!("failed to init repository: {error}"));
    repo.remote("origin", origin_url)
        .unwrap_or_else(|error| panic!("failed to add origin remote: {error}"));
    temp_dir
}

/// Returns the canonical form of `path`, resolving platform symlinks such as
/// `/var` on macOS.
///
/// # Panics
///
/// Panics if the path cannot be canonicalised.
pub fn canonical(path: &Path) -> PathBuf {
    path.canonicalize()
        .unwrap_or_else(|error| panic!("failed to canonicalise {}: {error}", path.display()))
}
