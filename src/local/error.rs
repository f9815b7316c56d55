//! Error types for local repository discovery and resolution.

use thiserror::Error;

/// Errors that may occur while mapping local paths to repositories.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocalDiscoveryError {
    /// The path is not within a Git repository.
    #[error("not inside a Git repository")]
    NotARepository,

    /// The repository has no usable remotes configured.
    #[error("no git remote found")]
    NoRemoteFound,

    /// Every readable remote points at a host that is not recognised.
    #[error("remote '{remote}' uses an unrecognised git repository host: {url} (supported: {supported})")]
    UnsupportedHost {
        /// Name of the first remote that was rejected.
        remote: String,
        /// The rejected remote URL.
        url: String,
        /// Comma separated list of recognised hosts.
        supported: String,
    },

    /// The path does not sit below the discovered repository root.
    #[error("file path points outside current repository: {path}")]
    PathOutsideRepository {
        /// The offending path.
        path: String,
    },

    /// No anchor path resolved to the requested repository.
    #[error("could not find a local checkout of {repository}")]
    NoMatchingLocalRepository {
        /// Repository identifier that was searched for.
        repository: String,
    },

    /// Git operation failed.
    #[error("git error: {message}")]
    Git {
        /// Error detail from the git2 library.
        message: String,
    },

    /// Filesystem access failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl From<git2::Error> for LocalDiscoveryError {
    fn from(error: git2::Error) -> Self {
        Self::Git {
            message: error.message().to_owned(),
        }
    }
}

impl From<std::io::Error> for LocalDiscoveryError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
