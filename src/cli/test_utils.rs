//! Shared helpers for CLI handler tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use git2::Repository;
use sgnav::{LaunchError, Launcher};
use tempfile::TempDir;

/// A temporary checkout with an `origin` remote.
pub struct Checkout {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Checkout {
    /// Canonical root of the checkout.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Initialises a repository whose `origin` points at `origin_url`.
pub fn init_checkout(origin_url: &str) -> Checkout {
    let temp_dir = TempDir::new().expect("should create temp directory");
    let repo = Repository::init(temp_dir.path()).expect("should init repository");
    repo.remote("origin", origin_url)
        .expect("should add origin remote");
    let root = temp_dir
        .path()
        .canonicalize()
        .expect("should canonicalize temp dir");
    Checkout {
        _temp_dir: temp_dir,
        root,
    }
}

/// Launcher that records URLs instead of starting programs.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    opened: Mutex<Vec<String>>,
    copied: Mutex<Vec<String>>,
}

impl RecordingLauncher {
    /// URLs passed to `open_url`.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .expect("opened mutex should be available")
            .clone()
    }

    /// URLs passed to `copy_to_clipboard`.
    pub fn copied(&self) -> Vec<String> {
        self.copied
            .lock()
            .expect("copied mutex should be available")
            .clone()
    }
}

impl Launcher for RecordingLauncher {
    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        self.opened
            .lock()
            .expect("opened mutex should be available")
            .push(url.to_owned());
        Ok(())
    }

    fn copy_to_clipboard(&self, url: &str) -> Result<(), LaunchError> {
        self.copied
            .lock()
            .expect("copied mutex should be available")
            .push(url.to_owned());
        Ok(())
    }
}
