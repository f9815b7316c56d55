//! Git2-based implementation of `GitMetadata`.

use std::path::{Path, PathBuf};

use git2::Repository;

use super::GitMetadata;
use crate::local::error::LocalDiscoveryError;

/// Reads repository metadata through libgit2.
///
/// Every call discovers the repository afresh; nothing is cached between
/// lookups.
#[derive(Debug, Default, Clone, Copy)]
pub struct Git2Metadata;

impl Git2Metadata {
    /// Creates a metadata reader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Opens the repository containing `dir`, searching upward.
fn open_repository(dir: &Path) -> Result<Repository, LocalDiscoveryError> {
    Repository::discover(dir).map_err(|error| {
        if error.code() == git2::ErrorCode::NotFound {
            LocalDiscoveryError::NotARepository
        } else {
            LocalDiscoveryError::from(error)
        }
    })
}

impl GitMetadata for Git2Metadata {
    fn repository_root(&self, dir: &Path) -> Result<PathBuf, LocalDiscoveryError> {
        let repo = open_repository(dir)?;
        let workdir = repo.workdir().ok_or(LocalDiscoveryError::NotARepository)?;
        // Resolve symlinks so roots compare equal to canonicalised inputs.
        Ok(workdir.canonicalize()?)
    }

    fn remote_names(&self, dir: &Path) -> Result<Vec<String>, LocalDiscoveryError> {
        let repo = open_repository(dir)?;
        let remotes = repo.remotes()?;
        Ok(remotes.iter().flatten().map(str::to_owned).collect())
    }

    fn remote_url(&self, dir: &Path, remote: &str) -> Result<String, LocalDiscoveryError> {
        let repo = open_repository(dir)?;
        let found = repo.find_remote(remote)?;
        found
            .url()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| LocalDiscoveryError::Git {
                message: format!("remote '{remote}' has no URL"),
            })
    }
}
