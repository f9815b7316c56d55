//! Local Git checkout discovery.
//!
//! This module maps paths inside a working copy to canonical repository
//! identifiers and repository-relative paths, and maps repository paths back
//! to files in local checkouts.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use sgnav::local::{Git2Metadata, HostRegistry, RepositoryResolver};
//!
//! let git = Git2Metadata::new();
//! let hosts = HostRegistry::default();
//! let resolver = RepositoryResolver::new(&git, &hosts);
//! match resolver.discover(Path::new("/work/widgets/src/main.rs"), false) {
//!     Ok(local_repo) => {
//!         println!("{} {}", local_repo.identifier(), local_repo.relative_path());
//!     }
//!     Err(e) => eprintln!("Discovery failed: {e}"),
//! }
//! ```

mod discovery;
mod error;
mod git_metadata;
mod remote;
mod resolution;
mod types;

pub use discovery::{LocalRepository, RepositoryResolver, containing_dir, order_remotes, relativize};
pub use error::LocalDiscoveryError;
pub use git_metadata::{Git2Metadata, GitMetadata};
#[cfg(test)]
pub use git_metadata::MockGitMetadata;
pub use remote::{DEFAULT_HOST, HostRegistry, HostRule};
pub use resolution::LocalResolver;
pub use types::{RelativePath, RepositoryIdentifier};
