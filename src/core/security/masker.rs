//! Term masking
//!
//! Censors banned terms with asterisks and tidies whitespace.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::sync::Arc;
use tracing::debug;

use super::terms::BannedTermSet;

static BLANK_RUN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{3,}").unwrap_or_else(|e| {
        tracing::error!("Failed to compile blank line regex: {}", e);
        Regex::new(r"[^\s\S]").unwrap()
    })
});

/// Lexical filter over a banned term set
#[derive(Debug, Clone)]
pub struct TermMasker {
    terms: Arc<BannedTermSet>,
}

impl Default for TermMasker {
    fn default() -> Self {
        Self::new(BannedTermSet::builtin())
    }
}

impl TermMasker {
    /// Create a masker over `terms`
    pub fn new(terms: Arc<BannedTermSet>) -> Self {
        Self { terms }
    }

    /// Mask every banned term, then normalize whitespace.
    ///
    /// Terms are applied one after another in list order, so a later term
    /// cannot match across characters an earlier term already masked.
    pub fn sanitize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut masked = text.to_string();
        let mut hits = 0usize;
        for term in self.terms.iter() {
            if !term.pattern().is_match(&masked) {
                continue;
            }
            hits += 1;
            let mask = term.mask();
            masked = term
                .pattern()
                .replace_all(&masked, NoExpand(&mask))
                .into_owned();
        }

        if hits > 0 {
            debug!(terms_masked = hits, "Masked banned terms");
        }

        normalize_whitespace(&masked)
    }
}

/// Strip trailing whitespace per line, cap blank runs at one blank line, trim.
fn normalize_whitespace(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').map(str::trim_end).collect();
    let joined = lines.join("\n");
    BLANK_RUN_PATTERN
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}
