use crate::eval::{Context, FilterOutcome};
use crate::filters::SecondaryFilter;
use crate::parse::Command;

/// Gate for package-manager installs (`pip install`, `npm install`).
///
/// Installs are legitimate but risky, never forbidden outright. The
/// filter approves when the environment contains the blast radius — a
/// virtualenv for pip, a project checkout for npm — or when every
/// explicitly named install source is trusted. Anything else escalates.
pub struct PackageInstallFilter;

/// pip flags whose value names an install source.
const PIP_SOURCE_FLAGS: &[&str] = &["--index-url", "-i", "--extra-index-url", "--trusted-host"];

/// npm flags whose value names an install source.
const NPM_SOURCE_FLAGS: &[&str] = &["--registry"];

impl PackageInstallFilter {
    /// Collect install-source values from the args, handling both
    /// `--flag value` and `--flag=value` spellings.
    fn sources<'a>(flags: &[&str], args: &'a [String]) -> Vec<&'a str> {
        let mut found = Vec::new();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if let Some((flag, value)) = arg.split_once('=') {
                if flags.contains(&flag) {
                    found.push(value);
                }
                continue;
            }
            if flags.contains(&arg.as_str()) {
                if let Some(value) = iter.next() {
                    found.push(value.as_str());
                }
            }
        }
        found
    }
}

impl SecondaryFilter for PackageInstallFilter {
    fn names(&self) -> &[&str] {
        &["pip", "pip3", "npm"]
    }

    fn evaluate(&self, command: &Command, ctx: &Context) -> FilterOutcome {
        if command.subcommand() != Some("install") {
            // Other subcommands fall back to the blanket confirm policy
            return FilterOutcome::Escalate;
        }

        let is_npm = command.executable == "npm";
        if is_npm && command.has_any_arg(&["-g", "--global"]) {
            // Global installs escape the project; never auto-approve
            return FilterOutcome::Escalate;
        }

        let isolated = if is_npm {
            ctx.in_project_directory
        } else {
            ctx.in_virtual_environment
        };
        if isolated == Some(true) {
            return FilterOutcome::Approved;
        }

        let flags = if is_npm { NPM_SOURCE_FLAGS } else { PIP_SOURCE_FLAGS };
        let sources = Self::sources(flags, &command.args);
        if !sources.is_empty()
            && sources
                .iter()
                .all(|source| ctx.trusts_source(source) == Some(true))
        {
            return FilterOutcome::Approved;
        }

        FilterOutcome::Escalate
    }

    fn guidance(&self) -> &str {
        "install inside a virtual environment or project, or from a trusted source"
    }
}
