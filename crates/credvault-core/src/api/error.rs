//! Error taxonomy for API operations.
//!
//! Every operation fails in exactly one of three shapes:
//! - `Status`: the server responded with 4xx/5xx
//! - `Network`: no response reached us (connect, timeout, body I/O)
//! - `Request`: the request could not be constructed or its response decoded
//!
//! Callers classify `Status` failures by status code (404 vs 403 on
//! add-credential). Nothing here retries.

use std::fmt;

use serde_json::Value;

/// Categories of API errors for consistent error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// HTTP status error (4xx, 5xx)
    Status,
    /// Request never produced a response
    Network,
    /// Local request construction or response decode failure
    Request,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Status => write!(f, "status"),
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Request => write!(f, "request"),
        }
    }
}

/// Structured error from an API operation.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// HTTP status code, for `Status` errors
    pub status: Option<u16>,
    /// One-line summary suitable for display
    pub message: String,
}

impl ApiError {
    /// Creates an HTTP status error, extracting a `{message}` field from
    /// a JSON error body when the server provides one.
    pub fn status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| {
                json.get("message")
                    .and_then(|v| v.as_str())
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| format!("HTTP {status}"));

        Self {
            kind: ApiErrorKind::Status,
            status: Some(status),
            message,
        }
    }

    /// Creates a network (no-response) error.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: None,
            message: message.into(),
        }
    }

    /// Creates a local request/decode error.
    pub fn request(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Request,
            status: None,
            message: message.into(),
        }
    }

    /// Classifies a reqwest transport error.
    ///
    /// Builder errors are local; everything else (connect, timeout, body)
    /// means no usable response arrived.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_builder() {
            Self::request(format!("Failed to build request: {err}"))
        } else if err.is_decode() {
            Self::request(format!("Failed to decode response: {err}"))
        } else if err.is_timeout() {
            Self::network("Request timed out")
        } else {
            Self::network(format!("No response from server: {err}"))
        }
    }

    /// HTTP status code for `Status` errors, if any.
    pub fn status_code(&self) -> Option<u16> {
        self.status
    }

    /// Returns true if no response reached the client.
    pub fn is_network(&self) -> bool {
        self.kind == ApiErrorKind::Network
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_extracts_json_message() {
        let err = ApiError::status(401, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.kind, ApiErrorKind::Status);
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.message, "Invalid credentials");
    }

    #[test]
    fn test_status_falls_back_to_code() {
        let err = ApiError::status(500, "<html>oops</html>");
        assert_eq!(err.message, "HTTP 500");
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_network_has_no_status() {
        let err = ApiError::network("connection refused");
        assert!(err.is_network());
        assert_eq!(err.status_code(), None);
    }
}
