//! Utility modules for the roast service
//!
//! - **error**: service error type and its HTTP rendering
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use logging::{LogLevel, bootstrap_logging, init_logging};

use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
