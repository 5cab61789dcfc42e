pub mod context;
pub mod decision;

pub use context::Context;
pub use decision::{Category, FilterOutcome, FinalDecision, Verdict};

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::config::Config;
use crate::filters::{self, SecondaryFilter};
use crate::parse;

/// Registry of the three ordered rule sets, keyed by executable name.
///
/// Built once at startup from configuration and read-only afterwards;
/// safe to share by reference across concurrent decisions.
pub struct RuleRegistry {
    prohibited: BTreeSet<String>,
    confirm: BTreeSet<String>,
    filters: HashMap<String, Arc<dyn SecondaryFilter>>,
}

impl RuleRegistry {
    /// Build the registry from configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut filter_map: HashMap<String, Arc<dyn SecondaryFilter>> = HashMap::new();
        for filter in filters::built_in(config) {
            for name in filter.names() {
                filter_map.insert((*name).to_string(), Arc::clone(&filter));
            }
        }

        Self {
            prohibited: config.commands.prohibited.iter().cloned().collect(),
            confirm: config.commands.confirm.iter().cloned().collect(),
            filters: filter_map,
        }
    }

    /// Classify an executable name by exact match.
    ///
    /// Lookup order is fixed and load-bearing: prohibition is a hard
    /// ceiling no context can override, and a context-aware filter
    /// outranks a blanket confirmation requirement for the same name.
    pub fn classify(&self, executable: &str) -> Category {
        if self.prohibited.contains(executable) {
            return Category::Prohibited;
        }
        if self.filters.contains_key(executable) {
            return Category::SecondaryFiltered;
        }
        if self.confirm.contains(executable) {
            return Category::ConfirmRequired;
        }
        Category::Default
    }

    /// Decide the verdict for a raw command string.
    ///
    /// Pure function of `(raw, ctx)`: no I/O, no stored state, identical
    /// inputs yield identical verdicts.
    pub fn decide(&self, raw: &str, ctx: &Context) -> Verdict {
        let command = parse::tokenize(raw);
        if command.executable.is_empty() {
            // Nothing to run; what an empty command means is the caller's call
            return Verdict::Allowed;
        }

        match self.classify(&command.executable) {
            Category::Prohibited => Verdict::Denied {
                reason: format!(
                    "executable '{}' is restricted and cannot be executed",
                    command.executable
                ),
            },
            Category::SecondaryFiltered => {
                let filter = &self.filters[&command.executable];
                match filter.evaluate(&command, ctx) {
                    FilterOutcome::Approved => Verdict::Allowed,
                    FilterOutcome::Rejected { reason } => Verdict::Denied { reason },
                    FilterOutcome::Escalate => Verdict::RequiresConfirmation {
                        reason: format!(
                            "secondary check inconclusive for '{}': {}",
                            command.executable,
                            filter.guidance()
                        ),
                    },
                }
            }
            Category::ConfirmRequired => Verdict::RequiresConfirmation {
                reason: format!(
                    "'{}' requires confirmation before execution",
                    command.executable
                ),
            },
            Category::Default => Verdict::Allowed,
        }
    }
}
