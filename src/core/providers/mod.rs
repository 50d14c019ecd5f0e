//! Generation providers
//!
//! The [`GenerationClient`] seam between the roast handler and the external
//! image-to-text service, and its Gemini implementation.

pub mod error;
pub mod gemini;

pub use error::ProviderError;
pub use gemini::{GeminiClient, GeminiConfig};

use async_trait::async_trait;

/// Image bytes sent inline with the instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    /// MIME type, e.g. `image/png`
    pub mime_type: String,
    /// Raw image bytes
    pub data: Vec<u8>,
}

/// One generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Instruction text
    pub instruction: String,
    /// Image to describe
    pub image: InlineImage,
}

/// Text extracted from a successful call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutput {
    /// Concatenated text parts; may be blank when the provider filtered output
    pub text: String,
    /// Provider finish reason, if reported
    pub finish_reason: Option<String>,
}

/// A multimodal text generation service
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate text for an instruction plus image
    async fn generate(&self, request: &GenerationRequest)
    -> Result<GenerationOutput, ProviderError>;

    /// Model identifier reported to clients
    fn model_name(&self) -> &str;

    /// API version reported to clients
    fn api_version(&self) -> &str;
}
