//! Error taxonomy for the auth core.
//!
//! ERROR HANDLING
//! ==============
//! `TokenDecodeError` never leaves the validator (it becomes `false` plus a
//! log line). `StoreError` is logged by the manager and never reaches a view.
//! `AuthError` is the only failure views see, and it carries the single
//! user-facing line a form renders.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::api::ApiError;

/// A bearer token whose claims could not be read.
#[derive(Debug, thiserror::Error)]
pub enum TokenDecodeError {
    /// The token has no claims segment.
    #[error("token is missing its claims segment")]
    MissingClaims,
    /// The claims segment is not valid base64url.
    #[error("claims segment is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The claims segment does not hold a JSON claims object.
    #[error("claims segment is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
    /// The `exp` claim is present but not a number.
    #[error("exp claim is not a number")]
    NonNumericExp,
}

/// Durable storage failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage surface itself is missing or denied (private mode, no window).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// A read, write or delete was rejected (quota, security policy).
    #[error("storage operation failed: {0}")]
    Operation(String),
    /// The session record could not be encoded.
    #[error("session encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Typed failure of a login or registration attempt.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The server answered but issued a token that is expired or unreadable.
    #[error("server issued an invalid or expired token")]
    InvalidToken,
    /// Login was rejected or the server could not be reached.
    #[error("login failed: {0}")]
    NetworkOrCredentials(#[source] ApiError),
    /// Registration was rejected or the server could not be reached.
    #[error("registration failed: {0}")]
    RegistrationFailed(#[source] ApiError),
}

impl AuthError {
    /// The single line a login/register form shows. Transport detail is
    /// collapsed: a wrong password and an unreachable server read
    /// the same to the user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidToken => "The server returned an invalid session. Please try again.",
            Self::NetworkOrCredentials(_) => "Invalid e-mail or password",
            Self::RegistrationFailed(_) => "Registration failed",
        }
    }
}
