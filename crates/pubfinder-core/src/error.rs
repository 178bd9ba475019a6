//! Error types for pubfinder-core.
//!
//! Every failure of the two backend calls is reduced to an [`ApiError`].
//! The UI only ever shows its `Display` text, so the messages are written
//! for the user.

use std::fmt;
use thiserror::Error;

/// Which backend call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Prediction,
}

impl Operation {
    /// What the operation was trying to fetch, as worded in error messages.
    pub fn subject(&self) -> &'static str {
        match self {
            Operation::Search => "search results",
            Operation::Prediction => "category",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Search => write!(f, "search"),
            Operation::Prediction => write!(f, "prediction"),
        }
    }
}

/// Errors that can occur while talking to the search or prediction backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status
    #[error("Failed to fetch {}. Status: {status}", .operation.subject())]
    HttpStatus { operation: Operation, status: u16 },
    /// Request never produced a response (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(String),
    /// Response body was not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_messages_embed_code() {
        let search = ApiError::HttpStatus {
            operation: Operation::Search,
            status: 500,
        };
        assert_eq!(
            search.to_string(),
            "Failed to fetch search results. Status: 500"
        );
        assert_eq!(search.status(), Some(500));

        let predict = ApiError::HttpStatus {
            operation: Operation::Prediction,
            status: 404,
        };
        assert_eq!(predict.to_string(), "Failed to fetch category. Status: 404");
    }

    #[test]
    fn test_json_error_becomes_decode() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("Invalid response:"));
        assert_eq!(err.status(), None);
    }
}
