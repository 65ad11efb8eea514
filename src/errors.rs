//! Error types for SynapseMD
//!
//! Covers intake validation, configuration, and the Gemini API boundary.
//! Malformed advice text is deliberately NOT an error: the response parser
//! degrades to defaults instead (see `advice::parser`).

use thiserror::Error;

/// Main error type for the symptom advisor
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// API key missing from both the environment and the config file
    #[error("Gemini API key is not defined. Set GEMINI_API_KEY or add it to the config file.")]
    MissingApiKey,

    /// A bio field failed range validation
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// Gemini API errors (non-2xx responses, malformed payloads)
    #[error("Gemini API error: {0}")]
    GeminiApiError(String),

    /// The provider returned a response with no usable text
    #[error("Gemini returned an empty response")]
    EmptyResponse,

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic errors with context
    #[error("Advisor error: {0}")]
    Generic(String),
}

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Convert anyhow errors to AdvisorError
impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::Generic(err.to_string())
    }
}
