//! Error type for backend calls.

use thiserror::Error;

/// Errors that can occur talking to the marketplace backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Request timed out.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Connection-level failure.
    #[error("Connection error: {0}")]
    Transport(String),

    /// Response body could not be decoded.
    #[error("Deserialization error: {0}")]
    Decode(String),

    /// Request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(String),

    /// Backend returned a record the domain model rejects.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl ApiError {
    /// Whether retrying the same call can plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Timeout(_) | ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => (500..600).contains(status),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(ApiError::Timeout("t".into()).is_retryable());
        assert!(ApiError::Status {
            status: 503,
            message: "unavailable".into()
        }
        .is_retryable());
        assert!(!ApiError::Status {
            status: 404,
            message: "not found".into()
        }
        .is_retryable());
        assert!(!ApiError::Decode("bad json".into()).is_retryable());
    }
}
