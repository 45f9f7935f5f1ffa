//! Client error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend responded with a failure status
    #[error("backend error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Error body the backend attaches to failure statuses
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

impl ClientError {
    /// Build an error from a failure-status response.
    ///
    /// The backend reports failures as `{"error": "..."}`; fall back to the
    /// raw body, or the bare status, when that shape is absent.
    pub fn from_error_body(body: &str, status: u16) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => format!("HTTP {status}"),
        };
        Self::Api { status, message }
    }

    /// Status code of the backend response, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the backend rejected the request (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if (400..500).contains(status))
    }

    /// Check if the backend itself failed (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body() {
        let error = ClientError::from_error_body(r#"{"error": "Bucket name is required"}"#, 400);

        match error {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Bucket name is required");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_plain_text_error_body() {
        let error = ClientError::from_error_body("Internal Server Error", 500);

        assert_eq!(error.status(), Some(500));
        assert!(error.is_server_error());
        assert!(error.to_string().contains("Internal Server Error"));
    }

    #[test]
    fn test_empty_error_body() {
        let error = ClientError::from_error_body("", 502);

        match error {
            ClientError::Api { message, .. } => assert_eq!(message, "HTTP 502"),
            _ => panic!("Expected Api error"),
        }
    }
}
