//! Leptos bridge for the auth manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `AuthContext` and provides it to the view tree. Views get
//! a read-only state signal plus the manager's operations; the manager's
//! state listener is the only writer of that signal.

use std::sync::Arc;

use leptos::prelude::*;

use super::error::AuthError;
use super::manager::AuthManager;
#[cfg(feature = "hydrate")]
use super::store::BrowserStore;
#[cfg(not(feature = "hydrate"))]
use super::store::MemoryStore;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::net::types::Session;
use crate::state::auth::AuthState;

/// Durable storage backing the session: `localStorage` in the browser, an
/// in-process map during server-side rendering.
#[cfg(feature = "hydrate")]
pub type DefaultBackend = BrowserStore;
#[cfg(not(feature = "hydrate"))]
pub type DefaultBackend = MemoryStore;

pub type AppAuthManager = AuthManager<HttpApi, DefaultBackend>;

#[derive(Clone)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    ready: RwSignal<bool>,
    manager: Arc<AppAuthManager>,
}

impl AuthContext {
    pub fn new(config: &ClientConfig) -> Self {
        let state = RwSignal::new(AuthState::default());
        let manager = AuthManager::new(
            HttpApi::new(config.api_base_url.clone()),
            DefaultBackend::default(),
            config.auth_options(),
        )
        .with_listener(move |snapshot| state.set(snapshot.clone()));
        Self { state, ready: RwSignal::new(false), manager: Arc::new(manager) }
    }

    /// Reactive, read-only view of the auth state.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Becomes `true` once `initialize()` has run; gates the first render.
    pub fn ready(&self) -> ReadSignal<bool> {
        self.ready.read_only()
    }

    pub fn api(&self) -> &HttpApi {
        self.manager.api()
    }

    pub fn initialize(&self) {
        self.manager.initialize();
        self.ready.set(true);
    }

    /// # Errors
    ///
    /// See [`AuthManager::login`].
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<Session, AuthError> {
        self.manager.login(identifier, secret).await
    }

    /// # Errors
    ///
    /// See [`AuthManager::register`].
    pub async fn register(&self, identifier: &str, secret: &str) -> Result<Session, AuthError> {
        self.manager.register(identifier, secret).await
    }

    pub fn logout(&self) {
        self.manager.logout();
    }
}

/// The `AuthContext` provided by `App`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
