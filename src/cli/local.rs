//! `sg local`: translate a Sourcegraph URL into a local file path.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use sgnav::{GitMetadata, NavigationError, Navigator, SgConfig};

/// Arguments for `sg local`.
#[derive(Debug, Clone, Args)]
pub struct LocalArgs {
    /// Sourcegraph blob URL to translate.
    pub url: String,

    /// Colon separated paths to try after the current directory.
    #[arg(long, value_delimiter = ':')]
    pub files: Vec<PathBuf>,

    /// Append `:<line>[:<col>]` from the URL fragment to the output.
    #[arg(long)]
    pub pos: bool,
}

/// Resolves `args.url` to a local path and writes it to `writer`.
///
/// # Errors
///
/// Returns a [`NavigationError`] when the URL is malformed, no anchor
/// matches, or the output cannot be written.
pub fn run<G, W>(
    args: &LocalArgs,
    git: &G,
    config: &SgConfig,
    writer: &mut W,
) -> Result<(), NavigationError>
where
    G: GitMetadata + ?Sized,
    W: Write,
{
    let found = Navigator::new(git, config).local_path(&args.url, &args.files)?;
    if args.pos {
        writeln!(writer, "{found}")?;
    } else {
        writeln!(writer, "{}", found.path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use sgnav::{Git2Metadata, LocalDiscoveryError, NavigationError, SgConfig};

    use super::{LocalArgs, run};
    use crate::cli::test_utils::init_checkout;

    const URL: &str = "https://sourcegraph.com/github.com/acme/widgets/-/blob/cmd/main.go#L7:3";

    #[test]
    fn resolves_through_anchor_files() {
        let checkout = init_checkout("git@github.com:acme/widgets.git");
        let args = LocalArgs {
            url: URL.to_owned(),
            files: vec![checkout.root().to_path_buf()],
            pos: false,
        };
        let mut output = Vec::new();

        run(&args, &Git2Metadata::new(), &SgConfig::default(), &mut output)
            .expect("should resolve");

        let expected = checkout.root().join("cmd").join("main.go");
        assert_eq!(
            String::from_utf8(output).expect("output should be valid UTF-8"),
            format!("{}\n", expected.display())
        );
    }

    #[test]
    fn pos_flag_appends_line_and_column() {
        let checkout = init_checkout("https://github.com/acme/widgets.git");
        let args = LocalArgs {
            url: URL.to_owned(),
            files: vec![checkout.root().to_path_buf()],
            pos: true,
        };
        let mut output = Vec::new();

        run(&args, &Git2Metadata::new(), &SgConfig::default(), &mut output)
            .expect("should resolve");

        let expected = checkout.root().join("cmd").join("main.go");
        assert_eq!(
            String::from_utf8(output).expect("output should be valid UTF-8"),
            format!("{}:7:3\n", expected.display())
        );
    }

    #[test]
    fn unmatched_repository_is_an_error() {
        let checkout = init_checkout("git@github.com:acme/unrelated.git");
        let args = LocalArgs {
            url: URL.to_owned(),
            files: vec![checkout.root().to_path_buf()],
            pos: false,
        };
        let mut output = Vec::new();

        let result = run(&args, &Git2Metadata::new(), &SgConfig::default(), &mut output);

        assert_eq!(
            result,
            Err(NavigationError::Local(
                LocalDiscoveryError::NoMatchingLocalRepository {
                    repository: "github.com/acme/widgets".to_owned(),
                }
            ))
        );
        assert!(output.is_empty());
    }
}
