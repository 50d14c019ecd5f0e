//! Banned term list
//!
//! The ordered set of phrases the masker and the gate share. Each term keeps a
//! precompiled case-insensitive literal pattern so masking a response never
//! compiles a regex on the request path.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::sync::Arc;
use tracing::{error, warn};

/// Built-in terms, applied in this order.
///
/// Order matters: masking is destructive, so a short term listed early (for
/// example `rand`) blanks part of a longer phrase listed after it.
pub const DEFAULT_BANNED_TERMS: &[&str] = &[
    // Hindi/Urdu slurs and degrading phrases
    "rand",
    "rand ki awlad",
    "rand ki aulaad",
    "bhosdika",
    "jhat ka baal",
    "chut si sakal",
    // English severe profanity
    "motherfucker",
    "mother-fucker",
    "fucker",
    "fucking hell",
    "piece of shit",
    "dumbass",
    "asshole",
];

static BUILTIN: Lazy<Arc<BannedTermSet>> = Lazy::new(|| {
    Arc::new(
        BannedTermSet::new(DEFAULT_BANNED_TERMS.iter().copied()).unwrap_or_else(|e| {
            error!("Failed to compile built-in banned terms: {}", e);
            BannedTermSet::empty()
        }),
    )
});

/// A single banned term with its matchers
#[derive(Debug, Clone)]
pub struct BannedTerm {
    /// Term as declared
    term: String,
    /// Lower-cased form used for containment checks
    lowered: String,
    /// Case-insensitive literal pattern
    pattern: Regex,
    /// Number of characters in the declared term
    char_len: usize,
}

impl BannedTerm {
    fn new(term: String) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&regex::escape(&term))
            .case_insensitive(true)
            .unicode(true)
            .build()?;

        Ok(Self {
            lowered: term.to_lowercase(),
            char_len: term.chars().count(),
            pattern,
            term,
        })
    }

    /// Term as declared
    pub fn as_str(&self) -> &str {
        &self.term
    }

    /// Lower-cased term
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Case-insensitive literal pattern for this term
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Asterisk run that replaces any casing of this term
    pub fn mask(&self) -> String {
        "*".repeat(self.char_len)
    }
}

/// Ordered, read-only list of banned terms
#[derive(Debug, Clone, Default)]
pub struct BannedTermSet {
    terms: Vec<BannedTerm>,
}

impl BannedTermSet {
    /// Build a term set, keeping declaration order.
    ///
    /// Blank terms are skipped: an empty needle would match every position.
    pub fn new<I, S>(terms: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut compiled = Vec::new();
        for term in terms {
            let term = term.into();
            if term.trim().is_empty() {
                warn!("Ignoring blank banned term");
                continue;
            }
            compiled.push(BannedTerm::new(term)?);
        }
        Ok(Self { terms: compiled })
    }

    /// Set with no terms
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared handle to the built-in list
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Built-in list followed by `extra`, in that order
    pub fn builtin_with<I, S>(extra: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = DEFAULT_BANNED_TERMS
            .iter()
            .map(|t| t.to_string())
            .chain(extra.into_iter().map(Into::into));
        Self::new(terms)
    }

    /// Iterate terms in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &BannedTerm> {
        self.terms.iter()
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the set has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
