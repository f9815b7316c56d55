//! Error types for browsing URL parsing.

use thiserror::Error;

/// Errors raised while interpreting browsing URLs or position arguments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UrlError {
    /// The URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// A position argument did not match `L<line>[:<col>]`.
    #[error("position must look like L<line>[:<col>], got '{0}'")]
    InvalidPosition(String),
}
