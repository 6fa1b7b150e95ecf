//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthPhase, AuthState};

/// Whether a protected route should bounce to `/login`: initialization is
/// over and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.phase() == AuthPhase::Anonymous
}

/// Redirect to `/login` whenever auth has settled and no session is present.
pub fn install_unauth_redirect<F>(auth: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
