//! Construction and parsing of Sourcegraph browsing URLs.
//!
//! Browsing URLs have the shape
//! `<base>/<repository>[/-/(tree|blob)/<path>][?q=<query>][#L<line>[:<col>]]`.

use percent_encoding::percent_decode_str;
use url::Url;
use url::form_urlencoded;

use super::error::UrlError;
use super::position::Position;
use crate::local::{RelativePath, RepositoryIdentifier};

/// Marker that introduces a file path in a blob view URL.
const BLOB_MARKER: &str = "/-/blob/";

/// Marker that introduces a directory path in a tree view URL.
const TREE_MARKER: &str = "/-/tree/";

/// Everything needed to build a browsing URL, apart from the instance base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseTarget {
    /// Repository to browse.
    pub repository: RepositoryIdentifier,
    /// Path inside the repository; empty for the root.
    pub path: RelativePath,
    /// Whether `path` is a directory (tree view) or a file (blob view).
    pub is_dir: bool,
    /// Optional line/column to jump to.
    pub position: Position,
    /// Optional search query.
    pub query: Option<String>,
}

/// Builds the browsing URL for `target` on the instance at `base_url`.
///
/// The root path produces the bare repository URL even for files. The
/// query string precedes the position fragment.
#[must_use]
pub fn build_browse_url(base_url: &str, target: &BrowseTarget) -> String {
    let mut url = format!("{}/{}", base_url.trim_end_matches('/'), target.repository);

    if !target.path.is_root() {
        let marker = if target.is_dir { TREE_MARKER } else { BLOB_MARKER };
        url.push_str(marker);
        url.push_str(target.path.as_str());
    }

    if let Some(query) = target.query.as_deref().filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(&search_query_string(query));
    }

    if let Some(fragment) = target.position.fragment() {
        url.push('#');
        url.push_str(&fragment);
    }

    url
}

/// Encodes `query` as a `q=` query-string pair.
///
/// The value is form-encoded, then `%2F` and `%3A` are turned back into `/`
/// and `:` to keep search queries readable.
#[must_use]
pub fn search_query_string(query: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .finish()
        .replace("%2F", "/")
        .replace("%3A", ":")
}

/// Repository and file path extracted from a blob view URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlobLocation {
    repository: RepositoryIdentifier,
    path: RelativePath,
}

impl BlobLocation {
    /// Extracts repository and file path from a browsing URL.
    ///
    /// Any `@<revision>` suffix on the repository is dropped. URLs that are
    /// not blob views yield an empty location rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidUrl`] when `url` cannot be parsed, its
    /// path is not valid UTF-8 once decoded, or the decoded file path holds
    /// `.` or `..` segments.
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        let parsed = Url::parse(url).map_err(|error| UrlError::InvalidUrl(error.to_string()))?;
        let decoded = percent_decode_str(parsed.path())
            .decode_utf8()
            .map_err(|error| UrlError::InvalidUrl(error.to_string()))?;

        let Some((repository_part, path)) = decoded.split_once(BLOB_MARKER) else {
            return Ok(Self::default());
        };

        if path.split('/').any(|segment| segment == ".." || segment == ".") {
            return Err(UrlError::InvalidUrl(format!(
                "file path contains dot segments: {path}"
            )));
        }

        let repository = repository_part
            .strip_prefix('/')
            .unwrap_or(repository_part);
        let without_revision = repository
            .split_once('@')
            .map_or(repository, |(name, _revision)| name);

        Ok(Self {
            repository: RepositoryIdentifier::new(without_revision),
            path: RelativePath::new(path),
        })
    }

    /// Returns the repository identifier, empty for non-blob URLs.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryIdentifier {
        &self.repository
    }

    /// Returns the file path, empty for non-blob URLs.
    #[must_use]
    pub const fn path(&self) -> &RelativePath {
        &self.path
    }

    /// Returns true when the URL was not a blob view.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }
}
