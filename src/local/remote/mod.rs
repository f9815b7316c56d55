//! Git remote URL translation into repository identifiers.
//!
//! Each recognised hosting service is described by a [`HostRule`]. A rule
//! accepts two remote URL shapes for its host:
//! - SSH shorthand: `git@github.com:owner/repo.git`
//! - HTTPS: `https://github.com/owner/repo.git`
//!
//! Anything else, including other schemes and other hosts, is rejected.

use url::Url;

use super::types::RepositoryIdentifier;

/// Host recognised when no other hosts are configured.
pub const DEFAULT_HOST: &str = "github.com";

/// User name expected in SSH shorthand remotes.
const DEFAULT_SSH_USER: &str = "git";

/// URL-shape rules for a single hosting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRule {
    host: String,
    ssh_user: String,
}

impl HostRule {
    /// Creates a rule for `host` accepting `git@<host>:` SSH remotes.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into().to_ascii_lowercase(),
            ssh_user: DEFAULT_SSH_USER.to_owned(),
        }
    }

    /// Overrides the user expected in SSH shorthand remotes.
    #[must_use]
    pub fn with_ssh_user(mut self, user: impl Into<String>) -> Self {
        self.ssh_user = user.into();
        self
    }

    /// Returns the host this rule recognises.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Translates `remote_url` into a repository identifier when it matches
    /// this rule.
    #[must_use]
    pub fn resolve(&self, remote_url: &str) -> Option<RepositoryIdentifier> {
        let trimmed = remote_url.trim();
        self.resolve_ssh_shorthand(trimmed)
            .or_else(|| self.resolve_https(trimmed))
    }

    fn resolve_ssh_shorthand(&self, url: &str) -> Option<RepositoryIdentifier> {
        let (user, rest) = url.split_once('@')?;
        let (host, path) = rest.split_once(':')?;
        if user != self.ssh_user || !host.eq_ignore_ascii_case(&self.host) {
            return None;
        }
        self.identifier_for_path(path)
    }

    fn resolve_https(&self, url: &str) -> Option<RepositoryIdentifier> {
        let parsed = Url::parse(url).ok()?;
        if parsed.scheme() != "https" {
            return None;
        }
        let host = parsed.host_str()?;
        if !host.eq_ignore_ascii_case(&self.host) {
            return None;
        }
        self.identifier_for_path(parsed.path())
    }

    fn identifier_for_path(&self, path: &str) -> Option<RepositoryIdentifier> {
        let trimmed = path.trim_matches('/');
        let name = trimmed.strip_suffix(".git").unwrap_or(trimmed);
        if name.is_empty() {
            return None;
        }
        Some(RepositoryIdentifier::from_host_and_path(&self.host, name))
    }
}

/// The set of hosting services whose remotes can be translated.
///
/// Rules are tried in insertion order and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRegistry {
    rules: Vec<HostRule>,
}

impl Default for HostRegistry {
    fn default() -> Self {
        Self {
            rules: vec![HostRule::new(DEFAULT_HOST)],
        }
    }
}

impl HostRegistry {
    /// Builds a registry from host names, falling back to `github.com` when
    /// none are given.
    #[must_use]
    pub fn from_hosts<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rules: Vec<HostRule> = hosts.into_iter().map(HostRule::new).collect();
        if rules.is_empty() {
            Self::default()
        } else {
            Self { rules }
        }
    }

    /// Adds a rule to the end of the registry.
    #[must_use]
    pub fn with_rule(mut self, rule: HostRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Translates a remote URL using the first matching rule.
    #[must_use]
    pub fn resolve(&self, remote_url: &str) -> Option<RepositoryIdentifier> {
        self.rules.iter().find_map(|rule| rule.resolve(remote_url))
    }

    /// Comma separated list of recognised hosts, for error messages.
    #[must_use]
    pub fn supported_hosts(&self) -> String {
        self.rules
            .iter()
            .map(HostRule::host)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
