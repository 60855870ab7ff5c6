//! Layered error types
//!
//! Engine errors cover orchestration concerns; API errors are what public
//! callers see. Core load failures pass through unchanged.

use thiserror::Error;
use tiret_core::CoreError;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Rule construction or table loading failed
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

/// API-level errors (public interface layer)
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unsupported language
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that is not supported
        code: String,
    },

    /// Invalid input
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// The reason why the input is invalid
        reason: String,
    },

    /// Engine layer error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownLanguage { code } => ApiError::UnsupportedLanguage { code },
            other => ApiError::Engine(EngineError::Core(other)),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Result type for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;
