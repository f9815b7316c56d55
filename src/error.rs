//! Crate-level error type aggregating every layer's failures.

use thiserror::Error;

use crate::config::ConfigError;
use crate::launch::LaunchError;
use crate::local::LocalDiscoveryError;
use crate::sourcegraph::UrlError;

/// Errors surfaced by navigation operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// Repository discovery or resolution failed.
    #[error(transparent)]
    Local(#[from] LocalDiscoveryError),

    /// A URL or position argument was malformed.
    #[error(transparent)]
    Url(#[from] UrlError),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The URL could not be handed to the browser or clipboard.
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl From<std::io::Error> for NavigationError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
