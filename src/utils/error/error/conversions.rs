//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::providers::ProviderError;
use crate::core::roast::RoastError;

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration { message, .. } => GatewayError::Config(message),
            other => GatewayError::Provider(other),
        }
    }
}

impl From<RoastError> for GatewayError {
    fn from(err: RoastError) -> Self {
        match err {
            RoastError::EmptyContent => GatewayError::EmptyContent(err.to_string()),
        }
    }
}

impl From<regex::Error> for GatewayError {
    fn from(err: regex::Error) -> Self {
        GatewayError::Config(format!("Invalid banned term pattern: {}", err))
    }
}

impl From<actix_multipart::MultipartError> for GatewayError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        GatewayError::BadRequest(format!("Invalid multipart data: {}", err))
    }
}
