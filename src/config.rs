//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so values are read with
//! `option_env!` when the crate is compiled:
//!
//! - `SENSORBOARD_API_URL`: remote API base URL (default `http://localhost:8000`)
//! - `SENSORBOARD_VALIDATE_REGISTRATION`: `1/true/yes/on` or `0/false/no/off`
//!   (default on)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::auth::manager::AuthOptions;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the remote API, without a trailing `/`.
    pub api_base_url: String,
    pub validate_registration_token: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    /// Build from the compile-time environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SENSORBOARD_API_URL"), option_env!("SENSORBOARD_VALIDATE_REGISTRATION"))
    }

    /// Build from raw values. Blank or unparseable values fall back to defaults.
    #[must_use]
    pub fn from_values(api_url: Option<&str>, validate_registration: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let validate_registration_token = validate_registration.and_then(parse_bool).unwrap_or(true);
        Self { api_base_url, validate_registration_token }
    }

    #[must_use]
    pub fn auth_options(&self) -> AuthOptions {
        AuthOptions { validate_registration_token: self.validate_registration_token }
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
