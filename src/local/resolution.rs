//! Reverse resolution from a repository path to a local file.
//!
//! Candidate anchor paths are tried in order; the first one that exists and
//! belongs to a checkout of the requested repository supplies the root that
//! the repository path is joined onto.

use std::fs;
use std::path::{Path, PathBuf};

use super::discovery::{RepositoryResolver, containing_dir};
use super::error::LocalDiscoveryError;
use super::git_metadata::GitMetadata;
use super::remote::HostRegistry;
use super::types::{RelativePath, RepositoryIdentifier};

/// Finds local checkouts of a repository among candidate anchor paths.
#[derive(Debug)]
pub struct LocalResolver<'a, G: ?Sized> {
    resolver: RepositoryResolver<'a, G>,
    git: &'a G,
}

impl<'a, G: GitMetadata + ?Sized> LocalResolver<'a, G> {
    /// Creates a resolver over the given metadata source and host rules.
    #[must_use]
    pub const fn new(git: &'a G, hosts: &'a HostRegistry) -> Self {
        Self {
            resolver: RepositoryResolver::new(git, hosts),
            git,
        }
    }

    /// Returns the local path of `path` inside the first anchor whose
    /// repository is `target`.
    ///
    /// Anchors that do not exist are skipped silently. Anchors that exist
    /// but cannot be resolved to a repository are skipped with a debug log.
    ///
    /// # Errors
    ///
    /// Returns [`LocalDiscoveryError::NoMatchingLocalRepository`] when no
    /// anchor matches.
    pub fn find<P: AsRef<Path>>(
        &self,
        target: &RepositoryIdentifier,
        path: &RelativePath,
        anchors: &[P],
    ) -> Result<PathBuf, LocalDiscoveryError> {
        for anchor in anchors {
            if let Some(root) = self.matching_root(target, anchor.as_ref()) {
                return Ok(path.join_onto(&root));
            }
        }

        Err(LocalDiscoveryError::NoMatchingLocalRepository {
            repository: target.to_string(),
        })
    }

    fn matching_root(&self, target: &RepositoryIdentifier, anchor: &Path) -> Option<PathBuf> {
        let Ok(metadata) = fs::metadata(anchor) else {
            tracing::trace!("anchor {} does not exist", anchor.display());
            return None;
        };
        let dir = containing_dir(anchor, metadata.is_dir());

        let candidate = match self.resolver.resolve_identifier(dir) {
            Ok((identifier, _remote)) => identifier,
            Err(error) => {
                tracing::debug!("skipping anchor {}: {error}", anchor.display());
                return None;
            }
        };
        if &candidate != target {
            tracing::debug!("anchor {} belongs to {candidate}", anchor.display());
            return None;
        }

        match self.git.repository_root(dir) {
            Ok(root) => Some(root),
            Err(error) => {
                tracing::debug!("skipping anchor {}: {error}", anchor.display());
                None
            }
        }
    }
}
