use crate::config::Config;
use crate::eval::{Context, FilterOutcome};
use crate::filters::SecondaryFilter;
use crate::parse::Command;

/// Gate for version-control pushes (`git push`).
///
/// Approves pushes to remotes on the allowed list; force-pushes always
/// escalate. Every other git subcommand is approved outright — git
/// carries no blanket confirmation requirement, so there is no friction
/// to preserve.
pub struct GitPushFilter {
    force_push_flags: Vec<String>,
}

/// git global options that consume a following value (`git -C repo push`).
const GIT_VALUE_OPTS: &[&str] = &["-C", "-c", "--git-dir", "--work-tree", "--namespace"];

impl GitPushFilter {
    pub fn from_config(config: &Config) -> Self {
        Self {
            force_push_flags: config.filters.force_push_flags.clone(),
        }
    }

    /// The git subcommand, skipping global options and their values.
    fn subcommand(command: &Command) -> Option<&str> {
        let mut iter = command.args.iter();
        while let Some(arg) = iter.next() {
            if arg.starts_with('-') {
                if GIT_VALUE_OPTS.contains(&arg.as_str()) {
                    iter.next();
                }
                continue;
            }
            return Some(arg.as_str());
        }
        None
    }

    /// The push target remote: first non-flag word after `push`,
    /// defaulting to `origin` when unspecified.
    fn remote(command: &Command) -> &str {
        command
            .args
            .iter()
            .skip_while(|a| *a != "push")
            .skip(1)
            .find(|a| !a.starts_with('-'))
            .map(String::as_str)
            .unwrap_or("origin")
    }
}

impl SecondaryFilter for GitPushFilter {
    fn names(&self) -> &[&str] {
        &["git"]
    }

    fn evaluate(&self, command: &Command, ctx: &Context) -> FilterOutcome {
        if Self::subcommand(command) != Some("push") {
            return FilterOutcome::Approved;
        }

        let force_flags: Vec<&str> = self.force_push_flags.iter().map(String::as_str).collect();
        if command.has_any_arg(&force_flags) {
            // Rewrites remote history; never auto-approve
            return FilterOutcome::Escalate;
        }

        match ctx.allows_remote(Self::remote(command)) {
            Some(true) => FilterOutcome::Approved,
            _ => FilterOutcome::Escalate,
        }
    }

    fn guidance(&self) -> &str {
        "pushes are auto-approved only to allowed remotes"
    }
}
