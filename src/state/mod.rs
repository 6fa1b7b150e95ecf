//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `dashboard`) so views depend on small
//! focused models that are testable without a reactive runtime.

pub mod auth;
pub mod dashboard;
