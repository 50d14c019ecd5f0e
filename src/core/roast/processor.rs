//! Roast post-processing
//!
//! Runs masking, moderation, and formatting over raw model output.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use super::error::RoastError;
use super::formatter::TextNormalizer;
use crate::core::security::{BannedTermSet, ContentGate, ModerationResult, TermMasker};

/// Advisory appended when the gate still finds a banned term
pub const CENSORED_NOTE: &str = "\n\n(Note: Some terms were censored for safety.)";

/// Display-ready roast plus its moderation status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedRoast {
    /// Final text shown to the user
    pub final_text: String,
    /// Moderation decision for the response metadata
    pub moderation: ModerationResult,
}

/// Three-stage pipeline over raw generated text
#[derive(Debug, Clone)]
pub struct RoastPostProcessor {
    masker: TermMasker,
    gate: ContentGate,
    normalizer: TextNormalizer,
}

impl Default for RoastPostProcessor {
    fn default() -> Self {
        Self::new(BannedTermSet::builtin())
    }
}

impl RoastPostProcessor {
    /// Create a processor whose masker and gate share `terms`
    pub fn new(terms: Arc<BannedTermSet>) -> Self {
        Self {
            masker: TermMasker::new(Arc::clone(&terms)),
            gate: ContentGate::new(terms),
            normalizer: TextNormalizer::new(),
        }
    }

    /// Process raw model output.
    ///
    /// Masking runs before the gate, so the gate only fails when a term
    /// survives masking. The note is appended before formatting and is
    /// formatted along with the rest of the text.
    pub fn process(&self, raw: &str) -> Result<ProcessedRoast, RoastError> {
        if raw.trim().is_empty() {
            return Err(RoastError::EmptyContent);
        }

        let mut sanitized = self.masker.sanitize(raw);
        let moderation = self.gate.evaluate(&sanitized);
        if !moderation.ok {
            warn!(reason = ?moderation.reason, "Moderation gate failed after masking");
            sanitized.push_str(CENSORED_NOTE);
        }

        let formatted = self.normalizer.format(&sanitized);
        debug!(
            raw_len = raw.len(),
            final_len = formatted.len(),
            "Post-processed roast"
        );

        Ok(ProcessedRoast {
            final_text: formatted.trim().to_string(),
            moderation,
        })
    }
}
