//! Response formatting
//!
//! Normalizes list markers and adds terminal periods to generated text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Glyph that replaces `-` and `*` list markers
pub const BULLET: &str = "• ";

static LIST_MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-*]\s+").unwrap_or_else(|e| {
        tracing::error!("Failed to compile list marker regex: {}", e);
        Regex::new(r"[^\s\S]").unwrap()
    })
});

/// Bullet and punctuation normalizer
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Create a normalizer
    pub fn new() -> Self {
        Self
    }

    /// Format `text` for display.
    ///
    /// Runs two passes: list markers first, then the punctuation heuristic.
    /// The heuristic adds a period after any line ending in an ASCII letter or
    /// digit unless the next line is blank, headings and list items included.
    pub fn format(&self, text: &str) -> String {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return text.to_string();
        }

        let mut lines: Vec<String> = trimmed
            .split('\n')
            .map(|line| {
                let line = line.trim_end();
                LIST_MARKER_PATTERN.replacen(line, 1, BULLET).into_owned()
            })
            .collect();

        let last = lines.len() - 1;
        for i in 0..last {
            let ends_alnum = lines[i]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_alphanumeric());
            // The newline after line `i` is followed by another newline only
            // when the next line is empty and is not the final line.
            let next_is_blank = lines[i + 1].is_empty() && i + 1 < last;
            if ends_alnum && !next_is_blank {
                lines[i].push('.');
            }
        }

        lines.join("\n")
    }
}
