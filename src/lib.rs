//! Translate between files in a local Git checkout and Sourcegraph URLs.
//!
//! The library resolves a local path to its canonical repository identifier
//! (`github.com/owner/name`) and repository-relative path, builds the
//! matching Sourcegraph tree, blob or search URL, and performs the reverse
//! lookup from a blob URL to a file in one of several candidate checkouts.

pub mod config;
pub mod error;
pub mod launch;
pub mod local;
pub mod navigator;
pub mod sourcegraph;

pub use config::{ConfigError, SgConfig, SourcegraphInstance};
pub use error::NavigationError;
pub use launch::{LaunchError, Launcher, SystemLauncher, UrlAction, deliver};
pub use local::{
    Git2Metadata, GitMetadata, HostRegistry, LocalDiscoveryError, RelativePath,
    RepositoryIdentifier,
};
pub use navigator::{LocalMatch, Navigator};
pub use sourcegraph::{BlobLocation, BrowseTarget, Position, UrlError};
