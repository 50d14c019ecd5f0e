//! Google Gemini Provider
//!
//! Google AI Studio `generateContent` with inline image input.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

// Re-export main types
pub use client::GeminiClient;
pub use config::{GeminiConfig, GenerationSettings, SafetySetting};
pub use error::{GeminiError, GeminiErrorMapper};

