use std::collections::BTreeSet;

use shellgate::config::Config;
use shellgate::eval::{Context, FinalDecision, RuleRegistry, Verdict};

fn verdict_for(command: &str, ctx: &Context) -> Verdict {
    shellgate::decide(command, ctx)
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Context seeded from the default config's allowlists, with the
/// environment facts pinned to "not isolated".
fn configured_context() -> Context {
    let mut ctx = Context::from_config(&Config::default_config());
    ctx.in_virtual_environment = Some(false);
    ctx.in_project_directory = Some(false);
    ctx
}

macro_rules! verdict_test {
    ($name:ident, $cmd:expr, $expected:literal) => {
        #[test]
        fn $name() {
            let v = verdict_for($cmd, &Context::default());
            assert_eq!(v.as_str(), $expected, "command: {}", $cmd);
        }
    };
}

// ── DENIED: prohibited executables, regardless of context ──

verdict_test!(deny_rm, "rm -rf /", "denied");
verdict_test!(deny_chmod, "chmod 777 /etc/passwd", "denied");
verdict_test!(deny_dd, "dd if=/dev/zero of=/dev/sda", "denied");
verdict_test!(deny_shutdown, "shutdown -h now", "denied");
verdict_test!(deny_reboot, "reboot", "denied");
verdict_test!(deny_sudo, "sudo apt install vim", "denied");
verdict_test!(deny_su, "su - root", "denied");
verdict_test!(deny_kill, "kill -9 1234", "denied");
verdict_test!(deny_modprobe, "modprobe nvidia", "denied");
verdict_test!(deny_iptables, "iptables -F", "denied");
verdict_test!(deny_nc, "nc -l 4444", "denied");
verdict_test!(deny_crontab, "crontab -e", "denied");
verdict_test!(deny_history, "history", "denied");
verdict_test!(deny_systemctl, "systemctl stop sshd", "denied");
verdict_test!(deny_mount, "mount /dev/sdb1 /mnt", "denied");
verdict_test!(deny_rm_via_path, "/bin/rm -rf /tmp", "denied");
verdict_test!(deny_rm_behind_env_prefix, "LANG=C rm -rf /tmp", "denied");

// ── REQUIRES CONFIRMATION: blanket confirm list ──

verdict_test!(confirm_curl, "curl https://example.com", "requires-confirmation");
verdict_test!(confirm_wget, "wget https://example.com/file", "requires-confirmation");
verdict_test!(confirm_yarn, "yarn add leftpad", "requires-confirmation");
verdict_test!(confirm_apt_get, "apt-get update", "requires-confirmation");
verdict_test!(confirm_brew, "brew install jq", "requires-confirmation");
verdict_test!(confirm_rsync, "rsync -a src/ dst/", "requires-confirmation");
verdict_test!(confirm_kubectl, "kubectl delete pod foo", "requires-confirmation");
verdict_test!(confirm_mv, "mv old.txt new.txt", "requires-confirmation");
verdict_test!(confirm_cp, "cp src.txt dst.txt", "requires-confirmation");
verdict_test!(confirm_ln, "ln -s target link", "requires-confirmation");
verdict_test!(confirm_top, "top", "requires-confirmation");
verdict_test!(confirm_ps, "ps aux", "requires-confirmation");
verdict_test!(confirm_df, "df -h", "requires-confirmation");
verdict_test!(confirm_source, "source ~/.bashrc", "requires-confirmation");
verdict_test!(confirm_tcpdump, "tcpdump -i eth0", "requires-confirmation");
// mkfs.ext4 is confirm-only even though bare mkfs is prohibited
verdict_test!(confirm_mkfs_ext4, "mkfs.ext4 /dev/sda1", "requires-confirmation");

// ── ALLOWED: executables in no list ──

verdict_test!(allow_ls, "ls -la", "allowed");
verdict_test!(allow_cat, "cat README.md", "allowed");
verdict_test!(allow_echo, "echo hello world", "allowed");
verdict_test!(allow_grep, "grep -r 'pattern' src/", "allowed");
verdict_test!(allow_pwd, "pwd", "allowed");
verdict_test!(allow_uname, "uname -a", "allowed");
verdict_test!(allow_make, "make -j4", "allowed");
verdict_test!(allow_python, "python3 script.py", "allowed");
verdict_test!(allow_cargo, "cargo build --release", "allowed");
verdict_test!(allow_empty, "", "allowed");
verdict_test!(allow_whitespace, "   ", "allowed");

// ── Secondary filters escalate without context evidence ──

verdict_test!(pip_install_no_context, "pip install requests", "requires-confirmation");
verdict_test!(npm_install_no_context, "npm install express", "requires-confirmation");
verdict_test!(ssh_no_context, "ssh user@host.example.com", "requires-confirmation");
verdict_test!(git_push_no_context, "git push origin main", "requires-confirmation");
verdict_test!(docker_prune_escalates, "docker system prune", "requires-confirmation");

// ── Secondary filters with context evidence ──

#[test]
fn pip_install_in_virtualenv_allowed() {
    let ctx = Context {
        in_virtual_environment: Some(true),
        ..Context::default()
    };
    assert_eq!(verdict_for("pip install requests", &ctx), Verdict::Allowed);
}

#[test]
fn pip_install_outside_virtualenv_requires_confirmation() {
    let ctx = Context {
        in_virtual_environment: Some(false),
        trusted_sources: Some(set(&[])),
        ..Context::default()
    };
    assert_eq!(
        verdict_for("pip install requests", &ctx).as_str(),
        "requires-confirmation"
    );
}

#[test]
fn pip_install_trusted_index_allowed() {
    let ctx = Context {
        trusted_sources: Some(set(&["pypi.internal"])),
        ..Context::default()
    };
    assert_eq!(
        verdict_for("pip install --index-url pypi.internal requests", &ctx),
        Verdict::Allowed
    );
}

#[test]
fn pip_list_falls_back_to_confirmation() {
    // Non-install subcommands keep the blanket package-manager policy
    let ctx = Context {
        in_virtual_environment: Some(true),
        ..Context::default()
    };
    assert_eq!(
        verdict_for("pip list", &ctx).as_str(),
        "requires-confirmation"
    );
}

#[test]
fn npm_install_in_project_allowed() {
    let ctx = Context {
        in_project_directory: Some(true),
        ..Context::default()
    };
    assert_eq!(verdict_for("npm install express", &ctx), Verdict::Allowed);
}

#[test]
fn npm_global_install_requires_confirmation() {
    let ctx = Context {
        in_project_directory: Some(true),
        ..Context::default()
    };
    assert_eq!(
        verdict_for("npm install -g express", &ctx).as_str(),
        "requires-confirmation"
    );
}

#[test]
fn ssh_trusted_host_allowed() {
    let ctx = Context {
        trusted_hosts: Some(set(&["trusted.example.com"])),
        ..Context::default()
    };
    assert_eq!(
        verdict_for("ssh user@trusted.example.com", &ctx),
        Verdict::Allowed
    );
}

#[test]
fn ssh_empty_trust_list_requires_confirmation() {
    let ctx = Context {
        trusted_hosts: Some(set(&[])),
        ..Context::default()
    };
    assert_eq!(
        verdict_for("ssh user@trusted.example.com", &ctx).as_str(),
        "requires-confirmation"
    );
}

#[test]
fn scp_to_trusted_host_allowed() {
    let ctx = configured_context();
    assert_eq!(
        verdict_for("scp artifact.tar.gz deploy@github.com:/srv", &ctx),
        Verdict::Allowed
    );
}

#[test]
fn git_push_allowed_remote() {
    let ctx = configured_context();
    assert_eq!(verdict_for("git push origin main", &ctx), Verdict::Allowed);
    assert_eq!(verdict_for("git push upstream main", &ctx), Verdict::Allowed);
}

#[test]
fn git_push_unlisted_remote_requires_confirmation() {
    let ctx = configured_context();
    assert_eq!(
        verdict_for("git push mirror main", &ctx).as_str(),
        "requires-confirmation"
    );
}

#[test]
fn git_force_push_requires_confirmation() {
    let ctx = configured_context();
    assert_eq!(
        verdict_for("git push --force origin main", &ctx).as_str(),
        "requires-confirmation"
    );
}

#[test]
fn git_non_push_allowed_without_context() {
    assert_eq!(
        verdict_for("git status", &Context::default()),
        Verdict::Allowed
    );
    assert_eq!(
        verdict_for("git log --oneline", &Context::default()),
        Verdict::Allowed
    );
}

#[test]
fn docker_run_allowed() {
    assert_eq!(
        verdict_for("docker run --rm alpine sh", &Context::default()),
        Verdict::Allowed
    );
}

#[test]
fn filter_outranks_confirm_listing() {
    // pip sits in the confirm list; with positive context evidence the
    // secondary filter skips the confirmation entirely
    let ctx = Context {
        in_virtual_environment: Some(true),
        ..Context::default()
    };
    assert_eq!(verdict_for("pip install requests", &ctx), Verdict::Allowed);
}

// ── Prohibition is a hard ceiling ──

#[test]
fn prohibited_denied_under_any_context() {
    let permissive = Context {
        in_virtual_environment: Some(true),
        in_project_directory: Some(true),
        trusted_hosts: Some(set(&["anywhere.example"])),
        trusted_sources: Some(set(&["pypi.org"])),
        allowed_remotes: Some(set(&["origin"])),
    };
    assert_eq!(verdict_for("rm -rf /", &permissive).as_str(), "denied");
    assert_eq!(verdict_for("sudo ls", &permissive).as_str(), "denied");
}

#[test]
fn affirmation_never_overrides_denial() {
    let verdict = verdict_for("rm -rf /", &Context::default());
    let resolved = shellgate::resolve(verdict, true);
    assert!(matches!(resolved, FinalDecision::Deny { .. }));
}

// ── Gate end-to-end ──

#[test]
fn confirmation_affirmed_allows() {
    let verdict = verdict_for("curl https://example.com", &Context::default());
    assert_eq!(shellgate::resolve(verdict, true), FinalDecision::Allow);
}

#[test]
fn confirmation_declined_denies_with_reason() {
    let verdict = verdict_for("curl https://example.com", &Context::default());
    let FinalDecision::Deny { reason } = shellgate::resolve(verdict, false) else {
        panic!("expected Deny");
    };
    assert!(reason.contains("curl"), "reason: {reason}");
}

#[test]
fn allowed_needs_no_affirmation() {
    let verdict = verdict_for("ls -la", &Context::default());
    assert_eq!(shellgate::resolve(verdict, false), FinalDecision::Allow);
}

// ── Determinism ──

#[test]
fn identical_inputs_identical_verdicts() {
    let config = Config::default_config();
    let registry = RuleRegistry::from_config(&config);
    let ctx = configured_context();
    for cmd in [
        "rm -rf /",
        "curl https://example.com",
        "pip install requests",
        "ssh user@github.com",
        "git push origin main",
        "ls -la",
    ] {
        assert_eq!(
            registry.decide(cmd, &ctx),
            registry.decide(cmd, &ctx),
            "command: {cmd}"
        );
    }
}

// ── Reasons name the offending executable ──

#[test]
fn denial_reason_names_executable() {
    let Verdict::Denied { reason } = verdict_for("rm -rf /", &Context::default()) else {
        panic!("expected Denied");
    };
    assert!(reason.contains("'rm'"), "reason: {reason}");
}

#[test]
fn escalation_reason_names_executable() {
    let Verdict::RequiresConfirmation { reason } =
        verdict_for("ssh user@host", &Context::default())
    else {
        panic!("expected RequiresConfirmation");
    };
    assert!(reason.contains("'ssh'"), "reason: {reason}");
}
