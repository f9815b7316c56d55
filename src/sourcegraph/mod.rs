//! Sourcegraph browsing URLs.
//!
//! Builds tree, blob and search URLs from repository coordinates, and reads
//! repository, path and position back out of blob URLs.

mod browse_url;
mod error;
mod position;

pub use browse_url::{BlobLocation, BrowseTarget, build_browse_url, search_query_string};
pub use error::UrlError;
pub use position::Position;
