//! User configuration loaded from a JSON file.
//!
//! The configuration maps repositories to the Sourcegraph instance that
//! hosts them and lists any Git hosts beyond `github.com` whose remotes
//! should be recognised. It is read once at startup and passed by reference
//! to every operation that needs it.
//!
//! # Location
//!
//! 1. `--config <PATH>` on the command line
//! 2. `SG_CONFIG` in the environment
//! 3. `$HOME/.sg-config`
//!
//! A missing file, or no location at all when `HOME` is unset, is treated
//! as an empty configuration.
//!
//! # Configuration File
//!
//! ```json
//! {
//!   "sourcegraphs": [
//!     { "url": "https://sourcegraph.example.com", "repos": ["github.com/acme/widgets"] }
//!   ],
//!   "hosts": ["github.com", "gitlab.example.com"]
//! }
//! ```

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::local::{HostRegistry, RepositoryIdentifier};

/// Instance used for repositories not listed in any configured instance.
pub const DEFAULT_SOURCEGRAPH_URL: &str = "https://sourcegraph.com";

/// File name of the configuration inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".sg-config";

/// Environment variable that overrides the configuration path.
pub const CONFIG_PATH_ENV: &str = "SG_CONFIG";

/// Errors raised while locating or reading the configuration file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The file exists but is not valid configuration JSON.
    #[error("error reading config {path}: {message}")]
    Parse {
        /// Path of the malformed file.
        path: String,
        /// Parser error detail.
        message: String,
    },

    /// The file could not be read.
    #[error("could not read config {path}: {message}")]
    Io {
        /// Path that failed to load.
        path: String,
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

/// A Sourcegraph instance and the repositories it serves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourcegraphInstance {
    /// Base URL of the instance, e.g. `https://sourcegraph.example.com`.
    pub url: String,
    /// Repository identifiers served by this instance.
    pub repos: Vec<String>,
}

/// Parsed contents of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SgConfig {
    /// Instances checked in order when choosing a base URL.
    pub sourcegraphs: Vec<SourcegraphInstance>,
    /// Git hosts whose remotes are recognised; empty means `github.com`.
    pub hosts: Vec<String>,
}

impl SgConfig {
    /// Parses configuration JSON read from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `content` is not valid
    /// configuration JSON.
    pub fn from_json(content: &str, path: &Utf8Path) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|error| ConfigError::Parse {
            path: path.to_string(),
            message: error.to_string(),
        })
    }

    /// Loads configuration from `path`, treating a missing file as empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed files and
    /// [`ConfigError::Io`] for other read failures.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        match read_file(path) {
            Ok(content) => Self::from_json(&content, path),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no config at {path}, using defaults");
                Ok(Self::default())
            }
            Err(error) => Err(ConfigError::Io {
                path: path.to_string(),
                message: error.to_string(),
            }),
        }
    }

    /// Loads configuration from `path` when a location is known, otherwise
    /// returns the empty configuration.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::load`].
    pub fn load_or_default(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        match path {
            Some(location) => Self::load(location),
            None => {
                tracing::debug!("no config location known, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns the base URL of the first instance that lists `repository`,
    /// or [`DEFAULT_SOURCEGRAPH_URL`].
    #[must_use]
    pub fn base_url_for(&self, repository: &RepositoryIdentifier) -> &str {
        self.sourcegraphs
            .iter()
            .find(|instance| instance.repos.iter().any(|r| r == repository.as_str()))
            .map_or(DEFAULT_SOURCEGRAPH_URL, |instance| {
                instance.url.trim_end_matches('/')
            })
    }

    /// Builds the registry of recognised Git hosts.
    #[must_use]
    pub fn host_registry(&self) -> HostRegistry {
        HostRegistry::from_hosts(self.hosts.iter().cloned())
    }
}

/// Resolves the configuration path from `HOME` unless one is given.
///
/// Returns `None` when no path is given and `HOME` is unset or empty.
#[must_use]
pub fn config_path(explicit: Option<&Utf8Path>) -> Option<Utf8PathBuf> {
    let home = std::env::var("HOME").ok().filter(|v| !v.is_empty());
    resolve_config_path(explicit, home.as_deref())
}

/// Resolves the configuration path from optional inputs.
///
/// Kept separate from [`config_path`] so the logic is testable without
/// touching the process environment.
pub(crate) fn resolve_config_path(
    explicit: Option<&Utf8Path>,
    home: Option<&str>,
) -> Option<Utf8PathBuf> {
    explicit.map(Utf8Path::to_path_buf).or_else(|| {
        home.map(|home_dir| Utf8PathBuf::from(home_dir).join(CONFIG_FILE_NAME))
    })
}

fn read_file(path: &Utf8Path) -> io::Result<String> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid config path '{path}': no file name"),
        )
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}

#[cfg(test)]
mod tests;
