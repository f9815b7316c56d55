//! Local repository discovery.
//!
//! Maps a path inside a Git checkout to its canonical repository identifier
//! and to its slash separated path relative to the repository root.

use std::path::{Component, Path, PathBuf};

use super::error::LocalDiscoveryError;
use super::git_metadata::GitMetadata;
use super::remote::HostRegistry;
use super::types::{RelativePath, RepositoryIdentifier};

/// Remote tried before any other, regardless of enumeration order.
const PREFERRED_REMOTE_NAME: &str = "origin";

/// A local path resolved against its enclosing repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepository {
    /// Repository working directory root.
    workdir: PathBuf,
    /// Canonical repository identifier.
    identifier: RepositoryIdentifier,
    /// Path of the input relative to `workdir`.
    relative_path: RelativePath,
    /// Name of the remote the identifier came from.
    remote_name: String,
}

impl LocalRepository {
    /// Returns the repository working directory root.
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Returns the canonical repository identifier.
    #[must_use]
    pub const fn identifier(&self) -> &RepositoryIdentifier {
        &self.identifier
    }

    /// Returns the path relative to the repository root.
    #[must_use]
    pub const fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Returns the name of the remote used for the identifier.
    #[must_use]
    pub fn remote_name(&self) -> &str {
        &self.remote_name
    }
}

/// Resolves repository identity and relative paths through a
/// [`GitMetadata`] capability.
#[derive(Debug)]
pub struct RepositoryResolver<'a, G: ?Sized> {
    git: &'a G,
    hosts: &'a HostRegistry,
}

impl<'a, G: GitMetadata + ?Sized> RepositoryResolver<'a, G> {
    /// Creates a resolver over the given metadata source and host rules.
    #[must_use]
    pub const fn new(git: &'a G, hosts: &'a HostRegistry) -> Self {
        Self { git, hosts }
    }

    /// Resolves the repository identifier for the repository containing
    /// `dir`, returning it with the name of the remote that produced it.
    ///
    /// Remotes are tried with `origin` first and the rest in enumeration
    /// order. A remote whose URL cannot be read, or whose URL matches no
    /// host rule, is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`LocalDiscoveryError::NoRemoteFound`] when no remote URL can
    /// be read and [`LocalDiscoveryError::UnsupportedHost`] when every
    /// readable URL points at an unrecognised host.
    pub fn resolve_identifier(
        &self,
        dir: &Path,
    ) -> Result<(RepositoryIdentifier, String), LocalDiscoveryError> {
        let remotes = order_remotes(self.git.remote_names(dir)?);
        let mut first_rejected: Option<(String, String)> = None;

        for remote in remotes {
            let url = match self.git.remote_url(dir, &remote) {
                Ok(url) => url,
                Err(error) => {
                    tracing::debug!("skipping remote '{remote}': {error}");
                    continue;
                }
            };

            if let Some(identifier) = self.hosts.resolve(&url) {
                tracing::debug!("resolved {identifier} from remote '{remote}'");
                return Ok((identifier, remote));
            }

            tracing::debug!("remote '{remote}' has unrecognised URL {url}");
            if first_rejected.is_none() {
                first_rejected = Some((remote, url));
            }
        }

        match first_rejected {
            Some((remote, url)) => Err(LocalDiscoveryError::UnsupportedHost {
                remote,
                url,
                supported: self.hosts.supported_hosts(),
            }),
            None => Err(LocalDiscoveryError::NoRemoteFound),
        }
    }

    /// Computes the path of `path` relative to its repository root.
    ///
    /// # Errors
    ///
    /// Returns [`LocalDiscoveryError::PathOutsideRepository`] when the path
    /// does not sit below the discovered root, or any metadata error.
    pub fn relative_path(
        &self,
        path: &Path,
        is_dir: bool,
    ) -> Result<RelativePath, LocalDiscoveryError> {
        let root = self.git.repository_root(containing_dir(path, is_dir))?;
        relativize(&root, path)
    }

    /// Resolves identifier, root and relative path for `path` in one pass.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::resolve_identifier`] and
    /// [`Self::relative_path`].
    pub fn discover(&self, path: &Path, is_dir: bool) -> Result<LocalRepository, LocalDiscoveryError> {
        let dir = containing_dir(path, is_dir);
        let (identifier, remote_name) = self.resolve_identifier(dir)?;
        let workdir = self.git.repository_root(dir)?;
        let relative_path = relativize(&workdir, path)?;

        Ok(LocalRepository {
            workdir,
            identifier,
            relative_path,
            remote_name,
        })
    }
}

/// Orders remote names so `origin` comes first and the others keep their
/// enumeration order.
#[must_use]
pub fn order_remotes(names: Vec<String>) -> Vec<String> {
    let (mut preferred, others): (Vec<String>, Vec<String>) = names
        .into_iter()
        .partition(|name| name == PREFERRED_REMOTE_NAME);
    preferred.extend(others);
    preferred
}

/// Returns the directory whose repository should be queried for `path`.
#[must_use]
pub fn containing_dir(path: &Path, is_dir: bool) -> &Path {
    if is_dir {
        return path;
    }
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => path,
    }
}

/// Expresses `path` relative to `root` with forward slashes.
///
/// # Errors
///
/// Returns [`LocalDiscoveryError::PathOutsideRepository`] when `path` is not
/// below `root` or would climb out of it through `..`.
pub fn relativize(root: &Path, path: &Path) -> Result<RelativePath, LocalDiscoveryError> {
    if path == root {
        return Ok(RelativePath::root());
    }

    let outside = || LocalDiscoveryError::PathOutsideRepository {
        path: path.display().to_string(),
    };
    let remainder = path.strip_prefix(root).map_err(|_| outside())?;

    let mut segments = Vec::new();
    for component in remainder.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(outside());
            }
        }
    }

    Ok(RelativePath::new(segments.join("/")))
}
