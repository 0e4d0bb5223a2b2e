/*
[INPUT]:  Error sources (config, intent validation, HTTP, remote rejections)
[OUTPUT]: Structured error types with exit-code classification
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the futures adapter
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Missing or malformed credentials/configuration, detected before any
    /// network activity
    #[error("configuration error: {0}")]
    Config(String),

    /// Order intent is missing a required field for its type, or carries a
    /// non-positive quantity/price
    #[error("invalid order intent: {0}")]
    InvalidIntent(String),

    /// Transport-level failure (DNS, connection reset, timeout)
    #[error("transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote service answered with a non-success HTTP status
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: StatusCode, body: String },

    /// Success status but the body is not parseable JSON
    #[error("invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl AdapterError {
    /// Check if the error was caught locally before any network call
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            AdapterError::Config(_) | AdapterError::InvalidIntent(_)
        )
    }

    /// Check if the error came from the remote call itself
    pub fn is_remote_error(&self) -> bool {
        matches!(
            self,
            AdapterError::Transport(_)
                | AdapterError::RequestFailed { .. }
                | AdapterError::InvalidResponse(_)
        )
    }

    /// Create a rejection error from status code and response body
    pub fn request_failed(status: StatusCode, body: impl Into<String>) -> Self {
        AdapterError::RequestFailed {
            status,
            body: body.into(),
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;
