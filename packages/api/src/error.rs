//! Failures of a backend call.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// HTTP 401: the credential is missing, expired or rejected.
    #[error("not authorized")]
    Unauthorized,
    /// HTTP 404.
    #[error("not found")]
    NotFound,
    /// Any other non-success status. `message` is the backend's `error` field.
    #[error("backend returned {status}{}", message_suffix(.message))]
    Backend { status: u16, message: Option<String> },
    /// `base_url` is not an absolute http(s) URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// A success response whose body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// Error payload shape used by the backend: `{"error": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Build the error for a non-success status from its response body.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Backend { status, message },
        }
    }

    /// Text to show the user: the backend's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Backend {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}
