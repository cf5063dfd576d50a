//! Error types for the hive client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the hive
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Failed to encode a request body
    #[error("Failed to encode request body: {0}")]
    EncodeError(#[from] serde_json::Error),

    /// Polling gave up before the job reached a terminal status
    #[error("job still incomplete after {attempts} poll(s)")]
    PollLimitReached {
        /// Number of status fetches performed
        attempts: u64,
    },
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_constructor() {
        let err = ClientError::api_error(500, "boom");
        assert!(matches!(
            err,
            ClientError::ApiError { status: 500, .. }
        ));
    }

    #[test]
    fn test_is_not_found() {
        assert!(ClientError::api_error(404, "no such job").is_not_found());
        assert!(!ClientError::api_error(500, "boom").is_not_found());
        assert!(!ClientError::ParseError("bad json".to_string()).is_not_found());
    }
}
