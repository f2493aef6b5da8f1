//! Core error types

use thiserror::Error;

/// Errors raised while constructing a rule set.
///
/// Tokenization and segmentation themselves are infallible: malformed text
/// degrades gracefully instead of erroring.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The initials pattern failed to compile
    #[error("invalid initials pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Rule data violated a structural requirement
    #[error("invalid rule data: {0}")]
    InvalidRule(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
