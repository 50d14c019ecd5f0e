//! Storage layer

pub mod files;

pub use files::{ImageFormat, NO_IMAGE_MESSAGE, PhotoStore, StoredPhoto, detect_mime};
