//! Error types for the decision review pipeline.
//!
//! Local failures (config, image access) propagate as `DrsError`. Remote
//! failures are `InferenceError` values that the referee folds into a
//! [`Verdict`](crate::Verdict) instead of returning them as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for DRS operations.
#[derive(Error, Debug)]
pub enum DrsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The image to review could not be read
    #[error("Failed to read image {path}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// No API key after resolving `${ENV_VAR}` references
    #[error("Inference API key not set. Set {0} or llm.api_key in the config file.")]
    MissingApiKey(String),
}

/// Failures of the remote chat-completion call.
#[derive(Error, Debug)]
pub enum InferenceError {
    /// Connection, TLS, timeout or other transport failure
    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// The endpoint answered with a non-2xx status
    #[error("Inference endpoint returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    /// The response body was not a chat-completion object
    #[error("Failed to parse inference response: {0}")]
    Decode(String),

    /// The response carried no choice with text content
    #[error("Inference response contained no completion text")]
    EmptyChoices,
}

impl InferenceError {
    /// HTTP status code, if the endpoint answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            InferenceError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Convenience type alias for DRS results.
pub type Result<T> = std::result::Result<T, DrsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_read_message_names_path() {
        let err = DrsError::ImageRead {
            path: PathBuf::from("data/missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/missing.png"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_status_code_only_for_http_errors() {
        let err = InferenceError::Status {
            code: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(InferenceError::EmptyChoices.status_code(), None);
    }
}
