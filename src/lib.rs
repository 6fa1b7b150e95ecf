//! # sensorboard
//!
//! Leptos + WASM dashboard for equipment sensor readings.
//!
//! The crate authenticates against a token endpoint, keeps the session in
//! browser storage, and charts per-equipment averages for a selectable time
//! window. `auth` holds the session core; `pages` and `components` are the
//! view layer on top of it.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
