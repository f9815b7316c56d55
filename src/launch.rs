//! Delivery of a built URL to the user.
//!
//! A URL is either opened in the default browser, copied to the clipboard,
//! or printed. The OS-specific programs used for the first two are hidden
//! behind [`Launcher`] so callers can substitute a recording fake.

use std::env::consts::OS;
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// What to do with a built URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UrlAction {
    /// Open the URL in the default browser.
    #[default]
    Open,
    /// Copy the URL to the system clipboard.
    Copy,
    /// Print the URL to standard output.
    Print,
}

impl UrlAction {
    /// Chooses the action from the `--copy` and `--print-url` flags.
    ///
    /// Printing wins when both are set.
    #[must_use]
    pub const fn from_flags(copy: bool, print: bool) -> Self {
        if print {
            Self::Print
        } else if copy {
            Self::Copy
        } else {
            Self::Open
        }
    }
}

/// Errors raised while handing a URL to an external program.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LaunchError {
    /// The program could not be started.
    #[error("failed to launch `{program}`: {message}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Error detail from the operating system.
        message: String,
    },

    /// The program ran but reported failure.
    #[error("`{program}` failed with {status}")]
    Failed {
        /// Program that failed.
        program: String,
        /// Exit status description.
        status: String,
    },

    /// No opener or clipboard program is known for this OS.
    #[error("OS {os} unsupported")]
    Unsupported {
        /// Name of the current operating system.
        os: String,
    },

    /// Writing the URL failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

/// Side effects needed to hand a URL to the desktop.
#[cfg_attr(test, mockall::automock)]
pub trait Launcher {
    /// Opens `url` in the default browser.
    ///
    /// # Errors
    ///
    /// Returns a [`LaunchError`] when the opener cannot be run.
    fn open_url(&self, url: &str) -> Result<(), LaunchError>;

    /// Copies `url` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns a [`LaunchError`] when the clipboard program cannot be run.
    fn copy_to_clipboard(&self, url: &str) -> Result<(), LaunchError>;
}

/// Launcher that shells out to the platform's opener and clipboard tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn opener(url: &str) -> Result<Command, LaunchError> {
        let command = match OS {
            "linux" | "freebsd" | "openbsd" | "netbsd" => {
                let mut command = Command::new("xdg-open");
                command.arg(url);
                command
            }
            "macos" => {
                let mut command = Command::new("open");
                command.arg(url);
                command
            }
            "windows" => {
                let mut command = Command::new("cmd");
                command.args(["/C", "start", "", url]);
                command
            }
            other => return Err(unsupported(other)),
        };
        Ok(command)
    }

    fn clipboard() -> Result<Command, LaunchError> {
        let command = match OS {
            "linux" | "freebsd" | "openbsd" | "netbsd" => {
                let mut command = Command::new("xsel");
                command.arg("-ib");
                command
            }
            "macos" => Command::new("pbcopy"),
            "windows" => Command::new("clip"),
            other => return Err(unsupported(other)),
        };
        Ok(command)
    }
}

impl Launcher for SystemLauncher {
    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        let mut command = Self::opener(url)?;
        let program = program_name(&command);
        tracing::debug!("opening {url} with {program}");
        let status = command.status().map_err(|error| LaunchError::Spawn {
            program: program.clone(),
            message: error.to_string(),
        })?;
        check_status(program, status)
    }

    fn copy_to_clipboard(&self, url: &str) -> Result<(), LaunchError> {
        let mut command = Self::clipboard()?;
        let program = program_name(&command);
        tracing::debug!("copying {url} with {program}");
        let spawn_error = |error: io::Error| LaunchError::Spawn {
            program: program.clone(),
            message: error.to_string(),
        };

        let status = pipe_to_child(&mut command, url.as_bytes()).map_err(spawn_error)?;
        check_status(program, status)
    }
}

/// Spawns `command`, writes `input` to its stdin and waits for it.
///
/// The child is always waited on; a failed write is reported after it exits.
fn pipe_to_child(command: &mut Command, input: &[u8]) -> io::Result<ExitStatus> {
    let mut child = command.stdin(Stdio::piped()).spawn()?;
    let written = child
        .stdin
        .take()
        .map_or(Ok(()), |mut stdin| stdin.write_all(input));
    let status = child.wait()?;
    written.map(|()| status)
}

fn program_name(command: &Command) -> String {
    command.get_program().to_string_lossy().into_owned()
}

fn check_status(program: String, status: ExitStatus) -> Result<(), LaunchError> {
    if status.success() {
        Ok(())
    } else {
        Err(LaunchError::Failed {
            program,
            status: status.to_string(),
        })
    }
}

fn unsupported(os: &str) -> LaunchError {
    LaunchError::Unsupported { os: os.to_owned() }
}

/// Delivers `url` according to `action`.
///
/// # Errors
///
/// Returns a [`LaunchError`] when the launcher fails or the URL cannot be
/// written.
pub fn deliver<L, W>(
    action: UrlAction,
    url: &str,
    launcher: &L,
    writer: &mut W,
) -> Result<(), LaunchError>
where
    L: Launcher + ?Sized,
    W: Write,
{
    match action {
        UrlAction::Open => launcher.open_url(url),
        UrlAction::Copy => launcher.copy_to_clipboard(url),
        UrlAction::Print => writeln!(writer, "{url}").map_err(|error| LaunchError::Io {
            message: error.to_string(),
        }),
    }
}
