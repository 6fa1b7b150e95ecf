//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by `AuthManager`; route guards and user-aware views read it
//! to coordinate login redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Authentication state for the life of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// The trusted session, if any. Only ever holds a token that passed
    /// validation when it was issued or rehydrated.
    pub current_session: Option<Session>,
    /// True until `initialize()` completes, and for the duration of a
    /// registration call.
    pub is_initializing: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { current_session: None, is_initializing: true }
    }
}

/// Coarse auth phase derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Initializing,
    Authenticated,
    Anonymous,
}

impl AuthState {
    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        match (&self.current_session, self.is_initializing) {
            (Some(_), _) => AuthPhase::Authenticated,
            (None, true) => AuthPhase::Initializing,
            (None, false) => AuthPhase::Anonymous,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_session.is_some()
    }

    /// Identifier of the signed-in user, if any.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.current_session.as_ref().map(|s| s.identifier.as_str())
    }

    /// Bearer token of the signed-in user, if any.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.current_session.as_ref().map(|s| s.token.as_str())
    }
}
