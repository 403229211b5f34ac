//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status code
    #[error("HTTP error! status: {}", .status.as_u16())]
    Status { status: StatusCode },

    /// Malformed response body
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Status code of a non-success response, if that is what failed
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
