//! Moderation gate
//!
//! Re-scans text for banned terms and reports a pass/fail decision.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::terms::BannedTermSet;

/// Message attached to a failed moderation result
pub const BANNED_TERM_MESSAGE: &str = "Removed disallowed terms; content toned down.";

/// Why moderation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationReason {
    /// A banned term is still present
    BannedTerm,
}

/// Moderation decision for one response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationResult {
    /// Whether the text passed
    pub ok: bool,
    /// Failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ModerationReason>,
    /// Human readable explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ModerationResult {
    /// Passing result
    pub fn passed() -> Self {
        Self {
            ok: true,
            reason: None,
            message: None,
        }
    }

    /// Failing result for a banned term hit
    pub fn banned_term() -> Self {
        Self {
            ok: false,
            reason: Some(ModerationReason::BannedTerm),
            message: Some(BANNED_TERM_MESSAGE.to_string()),
        }
    }
}

/// Containment check against a banned term set
#[derive(Debug, Clone)]
pub struct ContentGate {
    terms: Arc<BannedTermSet>,
}

impl Default for ContentGate {
    fn default() -> Self {
        Self::new(BannedTermSet::builtin())
    }
}

impl ContentGate {
    /// Create a gate over `terms`
    pub fn new(terms: Arc<BannedTermSet>) -> Self {
        Self { terms }
    }

    /// Evaluate `text`; fails when any term occurs as a case-insensitive substring
    pub fn evaluate(&self, text: &str) -> ModerationResult {
        let lowered = text.to_lowercase();
        if self.terms.iter().any(|term| lowered.contains(term.lowered())) {
            ModerationResult::banned_term()
        } else {
            ModerationResult::passed()
        }
    }
}
