//! Confirmation gate: the single point where caller intent — a typed
//! "yes" or an API confirm field — is consumed.

use crate::eval::{FinalDecision, Verdict};

/// Apply a caller's affirmation to a verdict.
///
/// A denial is final regardless of `affirmed`; an allowance needs no
/// confirmation; a confirmation requirement resolves on `affirmed`.
/// The engine never blocks waiting for input — obtaining `affirmed`
/// (prompting a human, reading a request field) is the caller's job.
pub fn resolve(verdict: Verdict, affirmed: bool) -> FinalDecision {
    match verdict {
        Verdict::Denied { reason } => FinalDecision::Deny { reason },
        Verdict::Allowed => FinalDecision::Allow,
        Verdict::RequiresConfirmation { reason } => {
            if affirmed {
                FinalDecision::Allow
            } else {
                FinalDecision::Deny { reason }
            }
        }
    }
}
