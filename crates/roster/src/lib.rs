//! `gradekit-roster` — identity reconciliation engine.
//!
//! Pure engine crate: builds canonical rosters from differently-shaped
//! sources, matches free-text names against them, and batches extension
//! applications. No terminal IO; interactive steps go through the
//! [`prompt::PromptProvider`] seam.

pub mod apply;
pub mod builder;
pub mod error;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod prompt;
pub mod resolve;

pub use apply::{apply_extensions, apply_for_student};
pub use error::RosterError;
pub use matcher::match_name;
pub use model::{BatchOutcome, CanonicalRoster, MatchResult, PendingAmbiguity};
pub use normalize::{normalize_display, roster_key};
pub use prompt::{PromptClosed, PromptProvider, ScriptedPrompt};
