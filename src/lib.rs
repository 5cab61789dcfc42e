//! shellgate: a command-execution gatekeeper.
//!
//! Given a raw shell command string, this crate decides whether to block
//! it outright, require explicit human confirmation, apply a
//! context-dependent secondary check, or allow it: the decision engine
//! produces a [`eval::Verdict`], and the confirmation gate turns a
//! verdict plus the caller's affirmation into a
//! [`eval::FinalDecision`]. Commands are tokenized with shlex and looked
//! up in a [`RuleRegistry`](crate::eval::RuleRegistry) built from
//! configuration; executing the approved command is the caller's job.
//!
//! # Architecture
//!
//! - **[`parse`]** — Tokenizer: shlex word splitting into executable + args.
//! - **[`eval`]** — Rule registry and decision engine; verdict and context types.
//! - **[`filters`]** — Secondary filters: per-family context-aware evaluators.
//! - **[`gate`]** — Confirmation gate: applies the caller's affirmation.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — Best-effort decision logging.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Decision engine: rule registry, verdict types, ambient context.
pub mod eval;
/// Secondary filter trait and per-family implementations.
pub mod filters;
/// Confirmation gate.
pub mod gate;
/// File-based decision logging.
pub mod logging;
/// Command tokenization.
pub mod parse;

use eval::{Context, FinalDecision, RuleRegistry, Verdict};

/// Build a registry from default config and decide a command string.
///
/// This is the main entry point for tests and simple usage. For repeated
/// decisions, build the registry once with
/// [`RuleRegistry::from_config`] and call
/// [`RuleRegistry::decide`] directly.
pub fn decide(command: &str, ctx: &Context) -> Verdict {
    let config = config::Config::default_config();
    let registry = RuleRegistry::from_config(&config);
    registry.decide(command, ctx)
}

/// Apply a caller's affirmation to a verdict. See [`gate::resolve`].
pub fn resolve(verdict: Verdict, affirmed: bool) -> FinalDecision {
    gate::resolve(verdict, affirmed)
}
