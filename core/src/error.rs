//! Transport/server error type shared by all collaborator calls.
//!
//! This core has exactly one error kind: a failed asynchronous call carrying
//! a numeric status code and a message. Business failures arrive as transport
//! errors with an appropriate status code; there is no separate validation
//! error. Effects never throw across the action boundary - every failure is
//! converted into the matching `...Error` action and stored in the slice's
//! `error` field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status code used for failures that never reached the server
/// (connection refused, DNS, decode failures).
pub const STATUS_TRANSPORT: u16 = 0;

/// Status code for authorization failures.
pub const STATUS_UNAUTHORIZED: u16 = 401;

/// A failed remote call.
///
/// Stored verbatim in slice state when a `...Error` action is reduced; the
/// view layer decides how to render it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("api error (status {status}): {message}")]
pub struct ApiError {
    /// HTTP status code, or [`STATUS_TRANSPORT`] if the request never
    /// produced a response.
    pub status: u16,

    /// Human-readable description from the server or the transport.
    pub message: String,
}

impl ApiError {
    /// Create an error from a status code and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Create a transport-level error (the request never got a response).
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(STATUS_TRANSPORT, message)
    }

    /// Whether this error is an authorization failure (status 401).
    ///
    /// The auth slice special-cases this: a 401 on user-fetch means
    /// "not logged in", a distinguished non-error terminal state, rather
    /// than an error screen.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.status == STATUS_UNAUTHORIZED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_only_401() {
        assert!(ApiError::new(401, "no session").is_unauthorized());
        assert!(!ApiError::new(500, "boom").is_unauthorized());
        assert!(!ApiError::transport("connection refused").is_unauthorized());
    }

    #[test]
    fn display_includes_status_and_message() {
        let error = ApiError::new(503, "unavailable");
        assert_eq!(error.to_string(), "api error (status 503): unavailable");
    }
}
