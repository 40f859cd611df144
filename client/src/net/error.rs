//! Service-layer error type.
//!
//! Every domain service returns `Result<T, ApiError>`. Views render
//! `ApiError::message` inline; `kind` lets callers tell transport problems
//! apart from backend rejections.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Broad failure category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure, no browser, or an undecodable success body.
    Network,
    /// Backend rejected the request (any non-success status except 401/403).
    Validation,
    /// Backend returned 401 or 403.
    Unauthorized,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    /// Build an error for a non-success HTTP response.
    ///
    /// Prefers the backend's `message` field and falls back to `fallback`.
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        let kind = match status {
            401 | 403 => ErrorKind::Unauthorized,
            _ => ErrorKind::Validation,
        };
        let message = backend_message(body).unwrap_or_else(|| fallback.to_owned());
        Self { kind, message }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extract a non-empty `message` string from a JSON error body.
pub(crate) fn backend_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.filter(|m| !m.trim().is_empty())
}
