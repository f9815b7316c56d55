//! Bidirectional translation between local paths and browsing URLs.
//!
//! [`Navigator`] combines the configuration with a [`GitMetadata`] source:
//! forwards it turns a file or directory into a Sourcegraph URL, backwards it
//! turns a blob URL into a file in a local checkout.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::SgConfig;
use crate::error::NavigationError;
use crate::local::{GitMetadata, HostRegistry, LocalResolver, RepositoryResolver};
use crate::sourcegraph::{BlobLocation, BrowseTarget, Position, build_browse_url};

/// A local file found for a browsing URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalMatch {
    /// Path of the file inside the matching checkout.
    pub path: PathBuf,
    /// Position carried in the URL fragment.
    pub position: Position,
}

impl fmt::Display for LocalMatch {
    /// Formats as `path[:line[:col]]`, the form editors accept.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())?;
        match (self.position.line(), self.position.column()) {
            (0, _) => Ok(()),
            (line, 0) => write!(f, ":{line}"),
            (line, column) => write!(f, ":{line}:{column}"),
        }
    }
}

/// Translates between local paths and browsing URLs.
#[derive(Debug)]
pub struct Navigator<'a, G: ?Sized> {
    git: &'a G,
    config: &'a SgConfig,
    hosts: HostRegistry,
}

impl<'a, G: GitMetadata + ?Sized> Navigator<'a, G> {
    /// Creates a navigator over `git` using the hosts and instances in
    /// `config`.
    #[must_use]
    pub fn new(git: &'a G, config: &'a SgConfig) -> Self {
        Self {
            git,
            config,
            hosts: config.host_registry(),
        }
    }

    /// Builds the browsing URL for `path`, optionally scoped to a position
    /// and a search query.
    ///
    /// Relative paths are resolved against the current directory. Symlinks
    /// in the parent directories are followed; a symlink named by `path`
    /// itself is linked at its own location.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Io`] when the path does not exist and
    /// [`NavigationError::Local`] when it cannot be mapped to a recognised
    /// repository.
    pub fn browse_url(
        &self,
        path: &Path,
        position: Position,
        query: Option<&str>,
    ) -> Result<String, NavigationError> {
        let absolute = resolve_parent(path)?;
        let is_dir = fs::symlink_metadata(&absolute)?.is_dir();

        let local_repo = RepositoryResolver::new(self.git, &self.hosts).discover(&absolute, is_dir)?;
        let base_url = self.config.base_url_for(local_repo.identifier());
        tracing::debug!(
            "{} is {} in {}",
            absolute.display(),
            local_repo.relative_path(),
            local_repo.identifier()
        );

        Ok(build_browse_url(
            base_url,
            &BrowseTarget {
                repository: local_repo.identifier().clone(),
                path: local_repo.relative_path().clone(),
                is_dir,
                position,
                query: query.map(str::to_owned),
            },
        ))
    }

    /// Finds the local file that `url` points at.
    ///
    /// The current directory is tried first, then each anchor in order.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Url`] for malformed URLs and
    /// [`NavigationError::Local`] when no anchor belongs to the repository.
    pub fn local_path<P: AsRef<Path>>(
        &self,
        url: &str,
        anchors: &[P],
    ) -> Result<LocalMatch, NavigationError> {
        let cwd = env::current_dir()?;
        let mut candidates: Vec<&Path> = Vec::with_capacity(anchors.len().saturating_add(1));
        candidates.push(&cwd);
        candidates.extend(anchors.iter().map(AsRef::as_ref));
        self.local_path_from(url, &candidates)
    }

    /// Finds the local file that `url` points at, trying exactly the given
    /// anchors in order.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::local_path`].
    pub fn local_path_from<P: AsRef<Path>>(
        &self,
        url: &str,
        anchors: &[P],
    ) -> Result<LocalMatch, NavigationError> {
        let location = BlobLocation::parse(url)?;
        let position = Position::from_url(url)?;

        let path = LocalResolver::new(self.git, &self.hosts).find(
            location.repository(),
            location.path(),
            anchors,
        )?;

        Ok(LocalMatch { path, position })
    }
}

/// Makes `path` absolute and canonicalises everything but its final
/// component.
fn resolve_parent(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => Ok(fs::canonicalize(parent)?.join(name)),
        _ => fs::canonicalize(&absolute),
    }
}
