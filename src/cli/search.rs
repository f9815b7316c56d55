//! `sg search`: run a Sourcegraph search scoped to a local path.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use sgnav::{GitMetadata, Launcher, NavigationError, Navigator, SgConfig, deliver};

use super::{DeliveryArgs, PositionArgs, current_dir_arg};

/// Arguments for `sg search`.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Search query.
    pub query: String,

    /// File or directory that scopes the search.
    #[arg(long, default_value_os_t = current_dir_arg())]
    pub path: PathBuf,

    /// Position within the file.
    #[command(flatten)]
    pub position: PositionArgs,

    /// How to deliver the URL.
    #[command(flatten)]
    pub delivery: DeliveryArgs,
}

/// Builds the search URL for `args` and delivers it.
///
/// # Errors
///
/// Returns a [`NavigationError`] when the path cannot be resolved or the URL
/// cannot be delivered.
pub fn run<G, L, W>(
    args: &SearchArgs,
    git: &G,
    config: &SgConfig,
    launcher: &L,
    writer: &mut W,
) -> Result<(), NavigationError>
where
    G: GitMetadata + ?Sized,
    L: Launcher + ?Sized,
    W: Write,
{
    let url = Navigator::new(git, config).browse_url(
        &args.path,
        args.position.position(),
        Some(args.query.as_str()),
    )?;
    deliver(args.delivery.action(), &url, launcher, writer)?;
    Ok(())
}
