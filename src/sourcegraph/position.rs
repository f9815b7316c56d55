//! Line and column positions carried in URL fragments.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::error::UrlError;

/// Matches `L<line>` with an optional `:<col>` anywhere in a fragment.
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static FRAGMENT_POSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"L(\d+)(?::(\d+))?").expect("FRAGMENT_POSITION is a valid regex literal")
});

/// Matches a whole position argument with an optional leading `L`.
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static POSITION_ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^L?(\d+)(?::(\d+))?$").expect("POSITION_ARGUMENT is a valid regex literal")
});

/// A line/column position within a file view.
///
/// Zero in either component means "unspecified". A position with no line is
/// rendered as no fragment at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    line: u32,
    column: u32,
}

impl Position {
    /// Creates a position from a line and column.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the line, or zero when unspecified.
    #[must_use]
    pub const fn line(self) -> u32 {
        self.line
    }

    /// Returns the column, or zero when unspecified.
    #[must_use]
    pub const fn column(self) -> u32 {
        self.column
    }

    /// Returns true when no line is set.
    #[must_use]
    pub const fn is_unspecified(self) -> bool {
        self.line == 0
    }

    /// Builds a position from optional `--line` and `--col` values.
    ///
    /// A column without a line is ignored.
    #[must_use]
    pub fn from_line_col(line: Option<u32>, column: Option<u32>) -> Self {
        line.map_or_else(Self::default, |l| Self::new(l, column.unwrap_or(0)))
    }

    /// Extracts a position from a URL fragment such as `L12:3`.
    ///
    /// A fragment without a recognisable position yields the unspecified
    /// position.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        let Some(captures) = FRAGMENT_POSITION.captures(fragment) else {
            return Self::default();
        };
        Self::new(capture_number(&captures, 1), capture_number(&captures, 2))
    }

    /// Extracts a position from the fragment of a full URL.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidUrl`] when `url` cannot be parsed.
    pub fn from_url(url: &str) -> Result<Self, UrlError> {
        let parsed = Url::parse(url).map_err(|error| UrlError::InvalidUrl(error.to_string()))?;
        Ok(parsed.fragment().map_or_else(Self::default, Self::from_fragment))
    }

    /// Parses a position argument such as `L12:3`, `12:3`, `L12` or `12`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidPosition`] when the argument does not match.
    pub fn parse_argument(value: &str) -> Result<Self, UrlError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let captures = POSITION_ARGUMENT
            .captures(trimmed)
            .ok_or_else(|| UrlError::InvalidPosition(value.to_owned()))?;
        Ok(Self::new(
            capture_number(&captures, 1),
            capture_number(&captures, 2),
        ))
    }

    /// Renders the position as `L<line>` or `L<line>:<col>`, or `None` when
    /// unspecified.
    #[must_use]
    pub fn fragment(self) -> Option<String> {
        if self.is_unspecified() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

/// Reads capture group `index` as a number, treating absence or overflow as
/// unspecified.
fn capture_number(captures: &regex::Captures<'_>, index: usize) -> u32 {
    captures
        .get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (0, _) => Ok(()),
            (line, 0) => write!(f, "L{line}"),
            (line, column) => write!(f, "L{line}:{column}"),
        }
    }
}
