//! Read-only Git metadata queries.
//!
//! This module provides a trait-based abstraction over the three questions
//! the resolver needs answered about a directory: where its repository root
//! is, which remotes are configured, and what URL each remote points at. The
//! trait lets tests substitute an in-memory fake for a real checkout.

mod git2_impl;

use std::path::{Path, PathBuf};

use super::error::LocalDiscoveryError;

pub use git2_impl::Git2Metadata;

/// Capability interface for version-control metadata lookups.
#[cfg_attr(test, mockall::automock)]
pub trait GitMetadata {
    /// Returns the absolute working directory root of the repository that
    /// contains `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`LocalDiscoveryError::NotARepository`] when `dir` is not
    /// inside a repository with a working directory.
    fn repository_root(&self, dir: &Path) -> Result<PathBuf, LocalDiscoveryError>;

    /// Lists the configured remote names in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error when the repository cannot be opened.
    fn remote_names(&self, dir: &Path) -> Result<Vec<String>, LocalDiscoveryError>;

    /// Returns the configured URL for `remote`.
    ///
    /// # Errors
    ///
    /// Returns an error when the remote is missing or has no URL.
    fn remote_url(&self, dir: &Path, remote: &str) -> Result<String, LocalDiscoveryError>;
}
