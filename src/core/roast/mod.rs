//! Roast generation pipeline
//!
//! Prompt building on the way out, and masking, moderation, and formatting of
//! the generated text on the way back.

mod error;
mod formatter;
mod processor;
mod prompt;

pub use error::{EMPTY_CONTENT_MESSAGE, RoastError};
pub use formatter::{BULLET, TextNormalizer};
pub use processor::{CENSORED_NOTE, ProcessedRoast, RoastPostProcessor};
pub use prompt::{DEFAULT_MAX_CONTEXT_CHARS, Intensity, PromptBuilder};
