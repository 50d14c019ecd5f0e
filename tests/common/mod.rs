//! Common test utilities for roast-gateway

pub mod fixtures;

pub use fixtures::{JPEG_BYTES, MultipartBody, PNG_BYTES, test_config};
pub use providers::ScriptedGenerator;
