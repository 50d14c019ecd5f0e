//! Output safety filtering
//!
//! Banned term masking and the moderation gate applied to generated text.

// Module declarations
mod gate;
mod masker;
mod terms;

pub use gate::{BANNED_TERM_MESSAGE, ContentGate, ModerationReason, ModerationResult};
pub use masker::TermMasker;
pub use terms::{BannedTerm, BannedTermSet, DEFAULT_BANNED_TERMS};
