//! Command-line surface and subcommand handlers.
//!
//! - [`open`]: Open a local file or directory on Sourcegraph
//! - [`search`]: Run a search scoped to a local file or directory
//! - [`local`]: Translate a Sourcegraph URL into a local file path

use std::path::PathBuf;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use sgnav::Position;
use sgnav::config::CONFIG_PATH_ENV;

pub mod local;
pub mod open;
pub mod search;

#[cfg(test)]
mod test_utils;

/// Open local files on Sourcegraph, and Sourcegraph URLs locally.
#[derive(Debug, Parser)]
#[command(name = "sg", version, about)]
pub struct Cli {
    /// Path to the JSON configuration file (default: ~/.sg-config).
    #[arg(long, global = true, env = CONFIG_PATH_ENV)]
    pub config: Option<Utf8PathBuf>,

    /// Log resolution steps to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open a file or directory on Sourcegraph.
    Open(open::OpenArgs),
    /// Search Sourcegraph from the repository containing a path.
    Search(search::SearchArgs),
    /// Translate a Sourcegraph URL into a local file path.
    Local(local::LocalArgs),
}

/// Position flags shared by `open` and `search`.
#[derive(Debug, Clone, Default, Args)]
pub struct PositionArgs {
    /// Position to open at, formatted as `L<line>[:<col>]`.
    #[arg(long, value_parser = Position::parse_argument)]
    pub pos: Option<Position>,

    /// Line to open at; ignored when `--pos` is given.
    #[arg(long)]
    pub line: Option<u32>,

    /// Column to open at; requires `--line`.
    #[arg(long = "col")]
    pub column: Option<u32>,
}

impl PositionArgs {
    /// Resolves the flags into a single position.
    pub fn position(&self) -> Position {
        self.pos
            .unwrap_or_else(|| Position::from_line_col(self.line, self.column))
    }
}

/// Flags choosing how a built URL is delivered.
#[derive(Debug, Clone, Default, Args)]
pub struct DeliveryArgs {
    /// Copy the URL to the clipboard instead of opening it.
    #[arg(long, conflicts_with = "print_url")]
    pub copy: bool,

    /// Print the URL instead of opening it.
    #[arg(long)]
    pub print_url: bool,
}

impl DeliveryArgs {
    /// Returns the delivery action selected by the flags.
    pub const fn action(&self) -> sgnav::UrlAction {
        sgnav::UrlAction::from_flags(self.copy, self.print_url)
    }
}

/// Default path argument: the current directory.
fn current_dir_arg() -> PathBuf {
    PathBuf::from(".")
}
