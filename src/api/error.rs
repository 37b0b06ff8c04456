//! API Errors
//!
//! Typed failures surfaced by the client. `Display` is the user-facing text.

use thiserror::Error;

use crate::models::ErrorBody;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401; the session has already been cleared when this is returned
    #[error("{0}")]
    Unauthorized(String),
    /// 403; logged, otherwise left to the caller
    #[error("{0}")]
    Forbidden(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    /// No response at all
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Pull the server's message out of a failure body, or fall back to a generic one
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| format!("Request failed with status code {}", status))
}

/// Map a non-success status and body onto an error. No side effects.
pub fn classify(status: u16, body: &str) -> ApiError {
    let message = error_message(status, body);
    match status {
        401 => ApiError::Unauthorized(message),
        403 => ApiError::Forbidden(message),
        _ => ApiError::Status { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_statuses() {
        assert!(classify(401, "").is_unauthorized());
        assert_eq!(classify(403, r#"{"message":"nope"}"#), ApiError::Forbidden("nope".into()));
        assert_eq!(
            classify(422, r#"{"error":"title is required"}"#),
            ApiError::Status { status: 422, message: "title is required".into() }
        );
    }

    #[test]
    fn test_fallback_message_for_opaque_body() {
        assert_eq!(
            classify(500, "<html>boom</html>").to_string(),
            "Request failed with status code 500"
        );
        assert_eq!(error_message(404, r#"{"message":""}"#), "Request failed with status code 404");
    }
}
