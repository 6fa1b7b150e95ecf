//! Client-side authentication core.
//!
//! ARCHITECTURE
//! ============
//! `token` decides whether a bearer token is usable, `store` persists the
//! session record, `manager` orchestrates login/register/logout and owns the
//! in-memory state, and `context` exposes that state to Leptos views.

pub mod context;
pub mod error;
pub mod manager;
pub mod store;
pub mod token;
