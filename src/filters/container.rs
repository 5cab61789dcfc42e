use crate::config::Config;
use crate::eval::{Context, FilterOutcome};
use crate::filters::SecondaryFilter;
use crate::parse::Command;

/// Gate for container engines (`docker`, `podman`).
///
/// Image-level operations (run, build) stay inside the engine and are
/// approved; anything else can reconfigure the daemon or the host and
/// escalates. Argument-only: no ambient context is consulted.
pub struct ContainerFilter {
    image_subcommands: Vec<String>,
}

impl ContainerFilter {
    pub fn from_config(config: &Config) -> Self {
        Self {
            image_subcommands: config.filters.container_subcommands.clone(),
        }
    }
}

impl SecondaryFilter for ContainerFilter {
    fn names(&self) -> &[&str] {
        &["docker", "podman"]
    }

    fn evaluate(&self, command: &Command, _ctx: &Context) -> FilterOutcome {
        match command.subcommand() {
            Some(sub) if self.image_subcommands.iter().any(|s| s == sub) => {
                FilterOutcome::Approved
            }
            _ => FilterOutcome::Escalate,
        }
    }

    fn guidance(&self) -> &str {
        "container engines are auto-approved for image runs and builds only"
    }
}
