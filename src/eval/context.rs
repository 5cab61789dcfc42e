use std::collections::BTreeSet;
use std::path::Path;

use crate::config::Config;

/// Ambient facts a secondary filter may consult. Supplied by the caller
/// per decision and read-only to the engine.
///
/// Every field is optional: `None` means the caller could not establish
/// that fact, and a filter that needs it must escalate rather than guess.
/// `Some` of an empty set is different — it is positive evidence that
/// nothing is trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// Whether a Python virtual environment is active.
    pub in_virtual_environment: Option<bool>,
    /// Whether the working directory looks like a project checkout.
    pub in_project_directory: Option<bool>,
    /// Hosts that remote-login commands may target.
    pub trusted_hosts: Option<BTreeSet<String>>,
    /// Package index hosts installs may pull from.
    pub trusted_sources: Option<BTreeSet<String>>,
    /// Git remotes that may be pushed to.
    pub allowed_remotes: Option<BTreeSet<String>>,
}

impl Context {
    /// Seed the allowlists from configuration, leaving the environment
    /// facts unset.
    pub fn from_config(config: &Config) -> Self {
        Self {
            in_virtual_environment: None,
            in_project_directory: None,
            trusted_hosts: Some(config.context.trusted_hosts.iter().cloned().collect()),
            trusted_sources: Some(config.context.trusted_sources.iter().cloned().collect()),
            allowed_remotes: Some(config.context.allowed_remotes.iter().cloned().collect()),
        }
    }

    /// Seed from config and probe the ambient environment: a virtualenv
    /// via `$VIRTUAL_ENV`, a project directory via marker files in the
    /// current directory.
    pub fn detect(config: &Config) -> Self {
        let mut ctx = Self::from_config(config);
        ctx.in_virtual_environment = Some(std::env::var_os("VIRTUAL_ENV").is_some());
        ctx.in_project_directory = Some(
            config
                .context
                .project_markers
                .iter()
                .any(|marker| Path::new(marker).exists()),
        );
        ctx
    }

    /// Whether `host` is trusted; `None` when the fact is unavailable.
    pub fn trusts_host(&self, host: &str) -> Option<bool> {
        self.trusted_hosts.as_ref().map(|set| set.contains(host))
    }

    /// Whether `source` is a trusted package index; `None` when unavailable.
    pub fn trusts_source(&self, source: &str) -> Option<bool> {
        self.trusted_sources.as_ref().map(|set| set.contains(source))
    }

    /// Whether `remote` may be pushed to; `None` when unavailable.
    pub fn allows_remote(&self, remote: &str) -> Option<bool> {
        self.allowed_remotes.as_ref().map(|set| set.contains(remote))
    }
}
