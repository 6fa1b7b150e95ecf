//! Auth session manager: the single writer of [`AuthState`].
//!
//! ARCHITECTURE
//! ============
//! The manager owns the in-memory state, is the only caller of the remote
//! auth endpoints, and the only writer of the persisted session record. Every
//! state mutation is published to an optional listener; the Leptos layer uses
//! that to drive a read-only signal for views.
//!
//! TRADE-OFFS
//! ==========
//! The lock is never held across an `.await`. State and storage are updated
//! together after the network call resolves, so no caller can observe a
//! session that is in memory but not yet persisted (or vice versa) on a
//! single-threaded event loop. Tokens are never renewed; they are checked
//! only at `initialize()` and when issued.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::sync::{Arc, PoisonError, RwLock};

use super::error::AuthError;
use super::store::{KeyValueStore, SessionStore};
use super::token;
use crate::net::api::AuthApi;
use crate::net::types::{Credentials, Session};
use crate::state::auth::AuthState;

/// Callback invoked with a snapshot after every state mutation.
pub type StateListener = Arc<dyn Fn(&AuthState) + Send + Sync>;

/// Behaviour switches for the manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthOptions {
    /// Run the token validator on tokens returned by registration, as login
    /// does. When off, a registration token is trusted as issued.
    pub validate_registration_token: bool,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self { validate_registration_token: true }
    }
}

pub struct AuthManager<A, S> {
    api: A,
    store: SessionStore<S>,
    options: AuthOptions,
    state: RwLock<AuthState>,
    listener: Option<StateListener>,
}

impl<A, S> AuthManager<A, S> {
    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// The remote API this manager authenticates against.
    pub fn api(&self) -> &A {
        &self.api
    }

    fn update(&self, mutate: impl FnOnce(&mut AuthState)) {
        let snapshot = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            mutate(&mut state);
            state.clone()
        };
        if let Some(listener) = &self.listener {
            listener(&snapshot);
        }
    }
}

impl<A: AuthApi, S: KeyValueStore> AuthManager<A, S> {
    pub fn new(api: A, backend: S, options: AuthOptions) -> Self {
        Self {
            api,
            store: SessionStore::new(backend),
            options,
            state: RwLock::new(AuthState::default()),
            listener: None,
        }
    }

    /// Publish every subsequent state change to `listener`.
    #[must_use]
    pub fn with_listener(mut self, listener: impl Fn(&AuthState) + Send + Sync + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    pub fn session_store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Rehydrate the persisted session, keeping it only if its token is still
    /// valid. Always ends with `is_initializing == false`. Call once per page
    /// load before rendering auth-dependent views.
    pub fn initialize(&self) {
        let restored = self.store.load().filter(|session| token::is_valid(&session.token));
        if restored.is_none() {
            if let Err(e) = self.store.clear() {
                leptos::logging::warn!("failed to clear stale session: {e}");
            }
        }
        self.update(|state| {
            state.current_session = restored;
            state.is_initializing = false;
        });
    }

    /// Exchange credentials for a token and establish a session.
    ///
    /// On failure the prior state is left untouched.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NetworkOrCredentials`] if the server rejects the
    ///   credentials or cannot be reached.
    /// - [`AuthError::InvalidToken`] if the issued token is expired or unreadable.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<Session, AuthError> {
        let credentials = Credentials::new(identifier, secret);
        let pair = self.api.obtain_token(&credentials).await.map_err(|e| {
            leptos::logging::warn!("login rejected for {identifier}: {e}");
            AuthError::NetworkOrCredentials(e)
        })?;
        if !token::is_valid(&pair.access) {
            leptos::logging::warn!("login for {identifier} returned an invalid token");
            return Err(AuthError::InvalidToken);
        }
        let session = Session::new(identifier, pair.access);
        self.establish(session.clone());
        Ok(session)
    }

    /// Create an account and establish a session from the returned token.
    ///
    /// `is_initializing` is held `true` for the duration of the call and is
    /// reset on every exit path, including cancellation.
    ///
    /// # Errors
    ///
    /// - [`AuthError::RegistrationFailed`] if the server rejects the
    ///   registration or cannot be reached.
    /// - [`AuthError::InvalidToken`] if registration-token validation is on
    ///   and the issued token is expired or unreadable.
    pub async fn register(&self, identifier: &str, secret: &str) -> Result<Session, AuthError> {
        self.update(|state| state.is_initializing = true);
        let _busy = BusyGuard { manager: self };

        let credentials = Credentials::new(identifier, secret);
        let pair = self.api.register(&credentials).await.map_err(|e| {
            leptos::logging::warn!("registration failed for {identifier}: {e}");
            AuthError::RegistrationFailed(e)
        })?;
        if self.options.validate_registration_token && !token::is_valid(&pair.access) {
            leptos::logging::warn!("registration for {identifier} returned an invalid token");
            return Err(AuthError::InvalidToken);
        }
        let session = Session::new(identifier, pair.access);
        self.establish(session.clone());
        Ok(session)
    }

    /// Drop the session and clear storage. Never fails: storage errors are
    /// logged and the in-memory state is logged out regardless.
    pub fn logout(&self) {
        self.update(|state| state.current_session = None);
        if let Err(e) = self.store.clear() {
            leptos::logging::error!("failed to clear session storage on logout: {e}");
        }
    }

    fn establish(&self, session: Session) {
        if let Err(e) = self.store.save(&session) {
            leptos::logging::warn!("session not persisted, it will not survive a reload: {e}");
        }
        self.update(|state| {
            state.current_session = Some(session);
            state.is_initializing = false;
        });
    }
}

/// Resets the busy flag when a registration call exits by any path.
struct BusyGuard<'a, A, S> {
    manager: &'a AuthManager<A, S>,
}

impl<A, S> Drop for BusyGuard<'_, A, S> {
    fn drop(&mut self) {
        self.manager.update(|state| state.is_initializing = false);
    }
}
