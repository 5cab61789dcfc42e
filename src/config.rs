use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub commands: Commands,
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub filters: FilterConfig,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Commands {
    /// Executables blocked outright.
    #[serde(default)]
    pub prohibited: Vec<String>,
    /// Executables gated behind blanket confirmation.
    #[serde(default)]
    pub confirm: Vec<String>,
}

/// Allowlist seeds the caller turns into a per-decision `Context`.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ContextConfig {
    #[serde(default)]
    pub trusted_hosts: Vec<String>,
    #[serde(default)]
    pub trusted_sources: Vec<String>,
    #[serde(default)]
    pub allowed_remotes: Vec<String>,
    /// Files whose presence marks a project checkout.
    #[serde(default)]
    pub project_markers: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct FilterConfig {
    #[serde(default)]
    pub force_push_flags: Vec<String>,
    /// Container subcommands that stay at the image level.
    #[serde(default)]
    pub container_subcommands: Vec<String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    commands: CommandsOverlay,
    #[serde(default)]
    context: ContextOverlay,
    #[serde(default)]
    filters: FiltersOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct CommandsOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    prohibited: Vec<String>,
    #[serde(default)]
    confirm: Vec<String>,
    #[serde(default)]
    remove_prohibited: Vec<String>,
    #[serde(default)]
    remove_confirm: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ContextOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    trusted_hosts: Vec<String>,
    #[serde(default)]
    trusted_sources: Vec<String>,
    #[serde(default)]
    allowed_remotes: Vec<String>,
    #[serde(default)]
    project_markers: Vec<String>,
    #[serde(default)]
    remove_trusted_hosts: Vec<String>,
    #[serde(default)]
    remove_trusted_sources: Vec<String>,
    #[serde(default)]
    remove_allowed_remotes: Vec<String>,
    #[serde(default)]
    remove_project_markers: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct FiltersOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    force_push_flags: Vec<String>,
    #[serde(default)]
    container_subcommands: Vec<String>,
    #[serde(default)]
    remove_force_push_flags: Vec<String>,
    #[serde(default)]
    remove_container_subcommands: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/shellgate/config.toml (if exists)
    ///
    /// User config merges with defaults: lists extend. Set `replace = true`
    /// in any section to replace its defaults entirely. Use `remove_<field>`
    /// lists to subtract specific items from defaults.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/shellgate/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/shellgate/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("shellgate: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let c = overlay.commands;
        merge_list(
            &mut self.commands.prohibited,
            c.prohibited,
            &c.remove_prohibited,
            c.replace,
        );
        merge_list(
            &mut self.commands.confirm,
            c.confirm,
            &c.remove_confirm,
            c.replace,
        );

        let x = overlay.context;
        merge_list(
            &mut self.context.trusted_hosts,
            x.trusted_hosts,
            &x.remove_trusted_hosts,
            x.replace,
        );
        merge_list(
            &mut self.context.trusted_sources,
            x.trusted_sources,
            &x.remove_trusted_sources,
            x.replace,
        );
        merge_list(
            &mut self.context.allowed_remotes,
            x.allowed_remotes,
            &x.remove_allowed_remotes,
            x.replace,
        );
        merge_list(
            &mut self.context.project_markers,
            x.project_markers,
            &x.remove_project_markers,
            x.replace,
        );

        let f = overlay.filters;
        merge_list(
            &mut self.filters.force_push_flags,
            f.force_push_flags,
            &f.remove_force_push_flags,
            f.replace,
        );
        merge_list(
            &mut self.filters.container_subcommands,
            f.container_subcommands,
            &f.remove_container_subcommands,
            f.replace,
        );
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}
