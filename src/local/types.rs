//! Domain-specific types for repository identity and repository paths.
//!
//! These newtypes keep host-qualified repository names and slash separated
//! repository paths from being confused with arbitrary strings.

use std::fmt;
use std::path::{Path, PathBuf};

/// A canonical `<host>/<owner>/<name>` repository identifier.
///
/// Identifiers never carry a URL scheme, credentials, or a `.git` suffix, so
/// the same repository compares equal whether it was reached over SSH or
/// HTTPS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RepositoryIdentifier(String);

impl RepositoryIdentifier {
    /// Creates an identifier from an already canonical string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds an identifier from a host and a repository path such as
    /// `owner/name`.
    ///
    /// Leading and trailing slashes are stripped from the path; any `.git`
    /// suffix is kept.
    #[must_use]
    pub fn from_host_and_path(host: &str, path: &str) -> Self {
        Self(format!("{host}/{}", path.trim_matches('/')))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the identifier has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RepositoryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RepositoryIdentifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for RepositoryIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A forward-slash separated path relative to a repository root.
///
/// The empty path denotes the root itself. `/` is accepted as a synonym for
/// the root when building URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    /// Creates a relative path from a slash separated string.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The repository root.
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the path denotes the repository root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty() || self.0 == "/"
    }

    /// Joins the path onto `base` using the host's separator conventions.
    ///
    /// Empty, `.` and `..` segments are dropped so the result never leaves
    /// `base`.
    #[must_use]
    pub fn join_onto(&self, base: &Path) -> PathBuf {
        self.0
            .split('/')
            .filter(|segment| !matches!(*segment, "" | "." | ".."))
            .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
