//! Unified SDK error types.

use thiserror::Error;

/// Fallback shown when an error carries no user-facing description.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Errors raised while building, sending, or decoding a REST request.
///
/// Every kind is terminal for the attempt that produced it.
#[derive(Error, Debug)]
pub enum HttpError {
    /// `base_url + path` (plus query and headers) did not form a valid request.
    /// Raised before any network I/O.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// DNS, connection, TLS or timeout failure.
    #[cfg(feature = "http")]
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any status other than exactly 200.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body did not match the expected schema.
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The outbound body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Result type alias for REST operations.
pub type HttpResult<T> = Result<T, HttpError>;

impl HttpError {
    /// Human-readable description suitable for an alert, if this kind has one.
    pub fn user_message(&self) -> Option<String> {
        match self {
            HttpError::InvalidRequest(_) => {
                Some("Invalid API request. Please check the parameters or URL.".to_string())
            }
            #[cfg(feature = "http")]
            HttpError::Transport(e) => Some(format!("Network error: {}", e)),
            HttpError::Api { body, .. } if body.trim().is_empty() => {
                Some("API error. No additional information is available.".to_string())
            }
            HttpError::Api { body, .. } => Some(format!("API error: {}", body)),
            HttpError::Decode(e) => Some(format!("Unexpected response format: {}", e)),
            HttpError::Serialization(_) => None,
        }
    }

    /// `user_message`, or the generic fallback.
    pub fn display_message(&self) -> String {
        self.user_message()
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<u32>("\"nope\"").unwrap_err()
    }

    #[test]
    fn test_api_error_display_contains_body() {
        let err = HttpError::Api {
            status: 404,
            body: "not found".to_string(),
        };
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("404"));
        assert_eq!(err.user_message().unwrap(), "API error: not found");
    }

    #[test]
    fn test_api_error_empty_body_message() {
        let err = HttpError::Api {
            status: 500,
            body: String::new(),
        };
        assert_eq!(
            err.display_message(),
            "API error. No additional information is available."
        );
    }

    #[test]
    fn test_serialization_falls_back_to_generic() {
        let err = HttpError::Serialization(json_error());
        assert!(err.user_message().is_none());
        assert_eq!(err.display_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_invalid_request_message() {
        let err = HttpError::InvalidRequest("relative URL without a base".to_string());
        assert_eq!(
            err.display_message(),
            "Invalid API request. Please check the parameters or URL."
        );
    }

    #[test]
    fn test_decode_message_mentions_cause() {
        let err = HttpError::Decode(json_error());
        assert!(err
            .display_message()
            .starts_with("Unexpected response format:"));
    }
}
