//! Gemini Error Handling

use super::models::{ApiErrorBody, ApiErrorDetail};
use crate::core::providers::ProviderError;

/// Provider name used in errors and logs
pub const PROVIDER: &str = "gemini";

pub type GeminiError = ProviderError;

/// Maps Gemini error payloads to [`ProviderError`]
pub struct GeminiErrorMapper;

impl GeminiErrorMapper {
    /// Map a non-success HTTP response
    pub fn from_http_status(status: u16, body: &str) -> ProviderError {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => Self::from_detail(status, parsed.error),
            Err(_) => {
                let message = if body.trim().is_empty() {
                    "Unknown error".to_string()
                } else {
                    body.trim().to_string()
                };
                ProviderError::api_error(PROVIDER, status, None, message)
            }
        }
    }

    /// Map an `error` object found in a response body
    pub fn from_api_response(status: u16, response: &serde_json::Value) -> ProviderError {
        let detail = response
            .get("error")
            .cloned()
            .and_then(|e| serde_json::from_value::<ApiErrorDetail>(e).ok())
            .unwrap_or_default();
        Self::from_detail(status, detail)
    }

    fn from_detail(status: u16, detail: ApiErrorDetail) -> ProviderError {
        // A 200 carrying an error object reports its own code
        let status = if status < 400 {
            detail.code.unwrap_or(500)
        } else {
            status
        };
        let message = detail
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());
        let code = detail.status.or_else(|| Some("UNKNOWN".to_string()));
        ProviderError::api_error(PROVIDER, status, code, message)
    }
}

/// Create a configuration error
pub fn gemini_config_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::configuration(PROVIDER, msg)
}

/// Create a network error
pub fn gemini_network_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::network(PROVIDER, msg)
}

/// Create a timeout error
pub fn gemini_timeout_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::timeout(PROVIDER, msg)
}

/// Create a response parsing error
pub fn gemini_parse_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::response_parsing(PROVIDER, msg)
}
