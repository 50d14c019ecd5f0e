//! Instruction building
//!
//! Turns the caller's intensity and context into the instruction sent with
//! the image.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default cap on user-supplied context, in characters
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 400;

const REGEN_LINE: &str =
    "\nRegeneration: produce a variant focusing on fresh angles, different metaphors.";

/// Roast style selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Warm and gentle
    #[default]
    Mild,
    /// Faster, playful jabs
    Spicy,
    /// Surreal and high energy
    Chaotic,
}

impl Intensity {
    /// Resolve a label; anything unrecognized is [`Intensity::Mild`]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "spicy" => Self::Spicy,
            "chaotic" => Self::Chaotic,
            _ => Self::Mild,
        }
    }

    /// Wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Spicy => "spicy",
            Self::Chaotic => "chaotic",
        }
    }

    /// Style guidance interpolated into the instruction
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::Mild => "warm, gently cheeky, light observational humor",
            Self::Spicy => "zestier, fast-paced, playful jabs, still positive spirit",
            Self::Chaotic => {
                "high-energy surreal, zany comparisons, clever exaggerations, never demeaning"
            }
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the model instruction
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    max_context_chars: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONTEXT_CHARS)
    }
}

impl PromptBuilder {
    /// Create a builder that keeps at most `max_context_chars` of user context
    pub fn new(max_context_chars: usize) -> Self {
        Self { max_context_chars }
    }

    /// Build the instruction.
    ///
    /// The regeneration line is only added when this is a regeneration and
    /// the caller sent back the previous prompt.
    pub fn build(
        &self,
        intensity: Intensity,
        user_context: &str,
        regen: bool,
        previous_prompt: &str,
    ) -> String {
        let mut prompt = base_prompt(intensity);

        let context = user_context.trim();
        if !context.is_empty() {
            prompt.push_str("\nUser context (optional flavoring): ");
            prompt.extend(context.chars().take(self.max_context_chars));
        }

        if regen && !previous_prompt.is_empty() {
            prompt.push_str(REGEN_LINE);
        }

        prompt
    }
}

fn base_prompt(intensity: Intensity) -> String {
    format!(
        "You generate a consensual, playful roast of a face in an image.\n\
         \n\
         Objectives:\n\
         - Style: {}.\n\
         - Keep it clever: surprising analogies, whimsical metaphors, comedic exaggerations.\n\
         - Never use profanity, slurs, sexually explicit or degrading language, or direct personal attacks.\n\
         - Avoid referencing protected traits or making harmful assumptions.\n\
         - Output 1-3 short punchy paragraphs OR a tight bullet list (4-7 bullets max).\n\
         - Keep it fun, upbeat, and obviously humorous.",
        intensity.guidance()
    )
}
