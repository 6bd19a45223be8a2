//! Normalized API error
//!
//! Every failure that reaches calling code has the same shape: a
//! human-readable message and, when the backend answered, its status code.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiError {
    /// Backend unreachable or the exchange did not complete
    Transport(String),
    /// Backend answered with a failure status
    Http { status: u16, message: String },
    /// Backend answered 2xx but reported `success: false`
    Rejected(String),
    /// Client-side form check failed; nothing was sent
    Validation(String),
    /// Successful response whose payload does not have the expected shape
    Decode(String),
    /// The local credential store could not be read or written
    Storage(String),
}

impl ApiError {
    /// Build an error from a failed response, preferring the backend's `message`
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|payload| {
                payload
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

        ApiError::Http {
            status: status.as_u16(),
            message,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport(msg)
            | ApiError::Rejected(msg)
            | ApiError::Validation(msg)
            | ApiError::Decode(msg)
            | ApiError::Storage(msg) => msg,
            ApiError::Http { message, .. } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "{} (HTTP {})", message, status),
            other => write!(f, "{}", other.message()),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => ApiError::Transport(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_comes_from_backend_payload() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"success":false,"message":"Email already registered"}"#,
        );
        assert_eq!(err.message(), "Email already registered");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_message_falls_back_when_body_is_not_json() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, "<html>Bad gateway</html>");
        assert_eq!(err.message(), "Request failed with status code 502");
        assert_eq!(err.to_string(), "Request failed with status code 502 (HTTP 502)");
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::from_response(StatusCode::UNAUTHORIZED, r#"{"message":""}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "Request failed with status code 401");

        assert!(!ApiError::Transport("connection refused".to_string()).is_unauthorized());
        assert_eq!(ApiError::Validation("x".to_string()).status(), None);
    }
}
