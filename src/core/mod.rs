//! Core functionality for the roast service
//!
//! Generation providers, the post-processing pipeline, and term moderation.

pub mod providers;
pub mod roast;
pub mod security;
