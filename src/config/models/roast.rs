//! Prompt and moderation configuration

use crate::core::roast::DEFAULT_MAX_CONTEXT_CHARS;
use serde::{Deserialize, Serialize};

/// Prompt building settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoastConfig {
    /// Cap on user-supplied context, in characters
    #[serde(default = "default_max_context_chars")]
    pub max_context_chars: usize,
}

impl Default for RoastConfig {
    fn default() -> Self {
        Self {
            max_context_chars: default_max_context_chars(),
        }
    }
}

/// Banned-term settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModerationConfig {
    /// Terms checked after the built-in list, in order
    #[serde(default)]
    pub additional_terms: Vec<String>,
}

fn default_max_context_chars() -> usize {
    DEFAULT_MAX_CONTEXT_CHARS
}
