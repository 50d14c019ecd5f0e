//! Error types for the roast service

use crate::core::providers::ProviderError;
use thiserror::Error;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file parse errors
    #[error("Configuration error: Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Upload validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upload exceeds the size cap
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Malformed request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Generation returned no usable text
    #[error("Empty content: {0}")]
    EmptyContent(String),

    /// Generation provider errors
    #[error("Provider error: {0}")]
    Provider(ProviderError),

    /// File storage errors
    #[error("File storage error: {0}")]
    FileStorage(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
