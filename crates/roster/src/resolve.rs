//! Ambiguity resolution.
//!
//! Ambiguous matches are queued during the main pass and resolved in a
//! batch afterwards, so every unambiguous name is processed and reported
//! first. Each pending query is offered its candidates plus an explicit
//! "none of these" escape; the caller applies the action immediately
//! after each binding.

use crate::model::{CanonicalRoster, PendingAmbiguity};
use crate::prompt::{PromptClosed, PromptProvider};

/// Label for the explicit opt-out appended after the candidates.
pub const NONE_OPTION: &str = "(none of these)";

/// Terminal outcome of one pending ambiguity. A skip is a valid outcome,
/// not an error, and must be reported visibly by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Bound { name: String, email: String },
    Skipped,
}

/// Resolve one pending ambiguity through the prompt provider.
///
/// Returns `Skipped` when the operator picks the none option, or when the
/// selected candidate has vanished from the roster (cannot happen within
/// one run; rosters are never mutated mid-batch). A closed input stream
/// propagates as an error so the caller can abort the remaining batch.
pub fn resolve_one(
    pending: &PendingAmbiguity,
    roster: &CanonicalRoster,
    prompt: &mut dyn PromptProvider,
) -> Result<Resolution, PromptClosed> {
    let mut options = pending.candidates.clone();
    options.push(NONE_OPTION.to_string());

    let message = format!(
        "Select the number for the correct student for '{}' (or none if no name matches)",
        pending.query
    );
    let ix = prompt.select_from_list(&message, &options)?;

    if ix >= pending.candidates.len() {
        return Ok(Resolution::Skipped);
    }

    let name = &pending.candidates[ix];
    Ok(match roster.get(name) {
        Some(email) => Resolution::Bound {
            name: name.clone(),
            email: email.to_string(),
        },
        None => Resolution::Skipped,
    })
}
