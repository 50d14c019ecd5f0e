//! Uploaded photo storage
//!
//! Validates uploads by content and writes them under random names.

mod local;
mod types;

// Re-export public types
pub use local::{NO_IMAGE_MESSAGE, PhotoStore};
pub use types::{ImageFormat, StoredPhoto, detect_mime};
