//! Error handling for the roast service
//!
//! This module defines the service-level error type and its HTTP rendering.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

// Re-export all public types
pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
