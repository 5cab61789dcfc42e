use crate::eval::{Context, FilterOutcome};
use crate::filters::SecondaryFilter;
use crate::parse::Command;

/// Gate for remote-login commands (`ssh`, `scp`).
///
/// Approves when the destination host is on the trusted list; escalates
/// when it is not, when no destination can be parsed, or when the
/// caller supplied no trusted-host list at all.
pub struct RemoteLoginFilter;

/// ssh/scp options that consume a following value.
const VALUE_OPTS: &[&str] = &[
    "-p", "-P", "-i", "-l", "-o", "-F", "-J", "-L", "-R", "-D", "-W", "-c", "-S",
];

/// Strip a `user@` prefix from a destination operand.
fn strip_user(operand: &str) -> &str {
    match operand.rsplit_once('@') {
        Some((_, host)) => host,
        None => operand,
    }
}

impl RemoteLoginFilter {
    /// Extract the destination host from the args: the first non-option
    /// operand, with any `user@` prefix stripped. For scp, a remote
    /// operand looks like `[user@]host:path`; colon-less operands are
    /// local paths and are skipped. Best effort.
    fn target_host(command: &Command) -> Option<String> {
        let mut iter = command.args.iter();
        while let Some(arg) = iter.next() {
            if arg.starts_with('-') {
                if VALUE_OPTS.contains(&arg.as_str()) {
                    iter.next(); // skip the option's value
                }
                continue;
            }
            if command.executable == "scp" {
                match arg.split_once(':') {
                    Some((host, _)) => return Some(strip_user(host).to_string()),
                    None => continue,
                }
            }
            return Some(strip_user(arg).to_string());
        }
        None
    }
}

impl SecondaryFilter for RemoteLoginFilter {
    fn names(&self) -> &[&str] {
        &["ssh", "scp"]
    }

    fn evaluate(&self, command: &Command, ctx: &Context) -> FilterOutcome {
        let Some(host) = Self::target_host(command) else {
            return FilterOutcome::Escalate;
        };
        match ctx.trusts_host(&host) {
            Some(true) => FilterOutcome::Approved,
            // Untrusted host, or no trusted-host list supplied
            _ => FilterOutcome::Escalate,
        }
    }

    fn guidance(&self) -> &str {
        "remote logins are auto-approved only to trusted hosts"
    }
}
