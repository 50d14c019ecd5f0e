//! Roast pipeline errors

use thiserror::Error;

/// User-facing text for [`RoastError::EmptyContent`]
pub const EMPTY_CONTENT_MESSAGE: &str =
    "No content returned (possibly safety blocked). Try mild intensity.";

/// Errors raised by the post-processing pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoastError {
    /// The model returned blank text
    #[error("No content returned (possibly safety blocked). Try mild intensity.")]
    EmptyContent,
}
