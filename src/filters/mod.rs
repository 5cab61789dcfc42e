//! Secondary filter evaluators: context-aware checks for command
//! families that are legitimate but risky.
//!
//! Each family (package-install, remote-login, version-control push,
//! container) has its own `SecondaryFilter` implementation, registered
//! into the rule registry at startup under the executable names it
//! covers. Filters approve when context evidence suffices and escalate
//! to the confirmation requirement otherwise; an explicit `Rejected` is
//! reserved for documented hard denials and none of the built-in
//! filters uses it.

/// Container engines: image-level operations vs host-touching ones.
pub mod container;
/// Version-control pushes: allowed remotes, force-push escalation.
pub mod git;
/// Package-manager installs: isolation and trusted sources.
pub mod package;
/// Remote logins: trusted destination hosts.
pub mod remote;

use std::sync::Arc;

use crate::config::Config;
use crate::eval::{Context, FilterOutcome};
use crate::parse::Command;

/// Trait for secondary filter evaluators.
///
/// An implementation covers one command family, inspecting the argument
/// tokens and the ambient [`Context`]. A filter that cannot approve or
/// deny with the available context must return
/// [`FilterOutcome::Escalate`] — it never silently allows more than
/// positive evidence supports, and a missing context field is treated
/// the same as inconclusive evidence.
pub trait SecondaryFilter: Send + Sync {
    /// Executable names this filter is registered under.
    fn names(&self) -> &[&str];

    /// Judge the command in the given context.
    fn evaluate(&self, command: &Command, ctx: &Context) -> FilterOutcome;

    /// Shown to the caller when the check is inconclusive.
    fn guidance(&self) -> &str;
}

/// The built-in filter set, one instance per command family.
pub fn built_in(config: &Config) -> Vec<Arc<dyn SecondaryFilter>> {
    vec![
        Arc::new(package::PackageInstallFilter),
        Arc::new(remote::RemoteLoginFilter),
        Arc::new(git::GitPushFilter::from_config(config)),
        Arc::new(container::ContainerFilter::from_config(config)),
    ]
}
