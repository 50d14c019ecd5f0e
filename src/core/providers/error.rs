//! Provider error type
//!
//! Errors raised while talking to the generation service.

use thiserror::Error;

/// Errors from a generation provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    /// Error reported by the upstream API, with its HTTP status and status code
    #[error("{provider} API error ({status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Create network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create timeout error
    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    /// Create configuration error
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Create API error with status code
    pub fn api_error(
        provider: &'static str,
        status: u16,
        code: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ApiError {
            provider,
            status,
            code,
            message: message.into(),
        }
    }

    /// Create response parsing error
    pub fn response_parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    /// Provider that raised the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::Configuration { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::ResponseParsing { provider, .. } => *provider,
        }
    }

    /// Message without the provider prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Network { message, .. }
            | Self::Timeout { message, .. }
            | Self::Configuration { message, .. }
            | Self::ApiError { message, .. }
            | Self::ResponseParsing { message, .. } => message,
        }
    }

    /// HTTP status reported for this error: the upstream status for API
    /// errors, a gateway status otherwise
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Network { .. } => 502,
            Self::Timeout { .. } => 504,
            Self::Configuration { .. } => 500,
            Self::ApiError { status, .. } => *status,
            Self::ResponseParsing { .. } => 502,
        }
    }
}
