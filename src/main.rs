//! `sg` CLI entrypoint: open local files on Sourcegraph and back.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use sgnav::{Git2Metadata, NavigationError, SgConfig, SystemLauncher, config};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Command};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SG_LOG";

fn main() -> ExitCode {
    let parsed = match Cli::try_parse() {
        Ok(parsed) => parsed,
        Err(error) => {
            drop(error.print());
            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(parsed.verbose);

    match run(parsed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            drop(writeln!(io::stderr().lock(), "Error: {error}"));
            ExitCode::FAILURE
        }
    }
}

fn run(parsed: Cli) -> Result<(), NavigationError> {
    let config_path = config::config_path(parsed.config.as_deref());
    let settings = SgConfig::load_or_default(config_path.as_deref())?;
    let git = Git2Metadata::new();
    let launcher = SystemLauncher;
    let mut stdout = io::stdout().lock();

    match parsed.command {
        Command::Open(args) => cli::open::run(&args, &git, &settings, &launcher, &mut stdout),
        Command::Search(args) => cli::search::run(&args, &git, &settings, &launcher, &mut stdout),
        Command::Local(args) => cli::local::run(&args, &git, &settings, &mut stdout),
    }
}

/// Installs a stderr log subscriber filtered by `SG_LOG`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    drop(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init(),
    );
}
