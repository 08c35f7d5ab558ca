//! Errors raised at the backend boundary.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("request failed with {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: StatusCode,
        /// `message` (or `error`) field of the JSON error body, when present.
        message: Option<String>,
    },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The body was JSON but matched none of the accepted shapes.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(&'static str),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message supplied by the server, shown verbatim to users.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(StatusCode::FORBIDDEN)
    }

    /// Build a status error from a raw response body.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        ApiError::Status {
            status,
            message: extract_message(body),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Result type for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|field| value.get(field)?.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_is_extracted() {
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"message":"Title is required"}"#);
        assert_eq!(err.server_message(), Some("Title is required"));
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.to_string(), "request failed with 400 Bad Request: Title is required");
    }

    #[test]
    fn test_error_field_is_extracted() {
        let err = ApiError::from_response(StatusCode::CONFLICT, r#"{"error":"Email already registered"}"#);
        assert_eq!(err.server_message(), Some("Email already registered"));
    }

    #[test]
    fn test_non_json_body_has_no_message() {
        let err = ApiError::from_response(StatusCode::UNAUTHORIZED, "Unauthorized");
        assert!(err.server_message().is_none());
        assert!(err.is_unauthorized());
        assert!(!err.is_forbidden());
    }

    #[test]
    fn test_empty_message_is_ignored() {
        let err = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":""}"#);
        assert!(err.server_message().is_none());
    }
}
