//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing and chart-geometry logic out of page and
//! component code so it can be tested without a browser.

pub mod auth;
pub mod chart;
