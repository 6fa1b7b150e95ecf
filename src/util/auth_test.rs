use super::*;
use crate::net::types::Session;

#[test]
fn should_redirect_unauth_when_not_initializing_and_session_missing() {
    let state = AuthState { current_session: None, is_initializing: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_initializing() {
    let state = AuthState { current_session: None, is_initializing: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let state = AuthState { current_session: Some(Session::new("alice", "tok")), is_initializing: false };
    assert!(!should_redirect_unauth(&state));
}
