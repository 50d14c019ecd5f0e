//! HTTP response handling for errors

use super::types::GatewayError;
use crate::core::providers::ProviderError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl GatewayError {
    /// Status, machine code, and user-facing message
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            GatewayError::Config(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                message.clone(),
            ),
            GatewayError::Yaml(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            GatewayError::Validation(message) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message.clone())
            }
            GatewayError::PayloadTooLarge(message) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                message.clone(),
            ),
            GatewayError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.clone())
            }
            GatewayError::EmptyContent(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_CONTENT",
                message.clone(),
            ),
            GatewayError::Provider(provider_error) => match provider_error {
                ProviderError::ApiError { status, .. } if *status == 429 => (
                    StatusCode::TOO_MANY_REQUESTS,
                    "PROVIDER_RATE_LIMIT",
                    format!("Gemini API error: {}", provider_error.message()),
                ),
                ProviderError::ApiError { .. } => (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_API_ERROR",
                    format!("Gemini API error: {}", provider_error.message()),
                ),
                ProviderError::Timeout { .. } => (
                    gateway_status(provider_error),
                    "PROVIDER_TIMEOUT",
                    provider_error.to_string(),
                ),
                _ => (
                    gateway_status(provider_error),
                    "PROVIDER_ERROR",
                    provider_error.to_string(),
                ),
            },
            GatewayError::FileStorage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "FILE_STORAGE_ERROR",
                "Failed to save file.".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        }
    }
}

fn gateway_status(error: &ProviderError) -> StatusCode {
    StatusCode::from_u16(error.http_status()).unwrap_or(StatusCode::BAD_GATEWAY)
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = self.parts();

        let (upstream_status, upstream_code) = match self {
            GatewayError::Provider(ProviderError::ApiError { status, code, .. }) => {
                (Some(*status), code.clone())
            }
            _ => (None, None),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None,
                upstream_status,
                upstream_code,
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
    /// HTTP status returned by the generation service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
    /// Status code string returned by the generation service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_code: Option<String>,
}
