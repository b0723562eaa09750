use thiserror::Error;
use std::path::PathBuf;

use crate::types::ErrorDetail;

/// Result type alias for session-fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Error types for client construction and configuration.
///
/// The fetch path itself never hands one of these to the caller: every
/// failure there is converted to either a completion-callback error string
/// or a re-authentication redirect.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl FetchError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Resolve a user-displayable message from an error of unknown shape.
///
/// Returns the error's own `message` when present and non-empty, otherwise
/// the default. Never fails: absent or non-conforming input falls back to
/// the default.
pub fn resolve_error_message(error: Option<&ErrorDetail>, default_message: &str) -> String {
    match error.and_then(|e| e.message.as_deref()) {
        Some(message) if !message.trim().is_empty() => message.to_string(),
        _ => default_message.to_string(),
    }
}
