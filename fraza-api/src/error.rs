//! API error types

use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rule profile failed to parse
    #[error("profile error: {0}")]
    Profile(String),

    /// Configuration is unusable as given
    #[error("configuration error: {0}")]
    Config(String),

    /// Rule set construction failed
    #[error("rule error: {0}")]
    Rule(#[from] fraza_core::CoreError),

    /// Serialization error
    #[cfg(feature = "json")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
