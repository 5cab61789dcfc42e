//! shellgate: command-execution gatekeeper.
//!
//! Reads one JSON request from stdin, classifies the command against the
//! configured rule sets, applies the caller's confirmation, and writes a
//! JSON decision to stdout:
//!
//!   in:  {"command": "pip install requests", "confirm": true}
//!   out: {"status": "allowed", "message": "command may be executed"}
//!
//! Statuses: `allowed`, `blocked` (policy denial), `cancelled` (caller
//! declined confirmation), `confirmation-required` (the command needs a
//! confirmation the caller has not supplied). Executing the command —
//! and prompting a human for the confirmation — is the caller's job.

use std::io::Read;

use serde::Deserialize;

use shellgate::config::Config;
use shellgate::eval::{Context, FinalDecision, RuleRegistry, Verdict};
use shellgate::{gate, logging};

#[derive(Deserialize)]
struct Request {
    command: String,
    /// Caller-supplied affirmation; absent means "not asked yet".
    confirm: Option<bool>,
}

fn main() {
    logging::init();

    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        eprintln!("failed to read stdin");
        std::process::exit(1);
    }

    let request: Request = match serde_json::from_str(&input) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("JSON parse error: {e}");
            std::process::exit(1);
        }
    };

    let config = Config::load();
    let registry = RuleRegistry::from_config(&config);
    let ctx = Context::detect(&config);

    let verdict = registry.decide(&request.command, &ctx);
    logging::log_decision(&request.command, &verdict);

    let (status, message) = match verdict {
        Verdict::RequiresConfirmation { reason } if request.confirm.is_none() => {
            ("confirmation-required", reason)
        }
        verdict => {
            let was_confirmable = matches!(verdict, Verdict::RequiresConfirmation { .. });
            match gate::resolve(verdict, request.confirm.unwrap_or(false)) {
                FinalDecision::Allow => {
                    let message = if request.command.trim().is_empty() {
                        "empty command; nothing to execute"
                    } else {
                        "command may be executed"
                    };
                    ("allowed", message.to_string())
                }
                FinalDecision::Deny { reason } if was_confirmable => ("cancelled", reason),
                FinalDecision::Deny { reason } => ("blocked", reason),
            }
        }
    };

    let output = serde_json::json!({
        "status": status,
        "message": message,
    });

    println!("{}", serde_json::to_string(&output).unwrap());
}
