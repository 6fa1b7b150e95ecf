//! REST client for the remote sensor API.
//!
//! Client-side (hydrate): HTTP calls via `gloo-net` (browser `fetch`).
//! Native (SSR host, tests): the same calls via `reqwest`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a typed [`ApiError`]; the auth manager converts those
//! into `AuthError` at its boundary so views never see transport errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AggregatePoint, Credentials, Period, TokenPair};

/// Transport-level failure talking to the remote API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, CORS, offline).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// A 2xx response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Token issuance and account registration.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for a token pair (`POST /token`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-2xx status, or a
    /// response without an `access` token.
    async fn obtain_token(&self, credentials: &Credentials) -> Result<TokenPair, ApiError>;

    /// Create an account and receive a usable token pair (`POST /register`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-2xx status (e.g. a
    /// duplicate identifier), or a response without an `access` token.
    async fn register(&self, credentials: &Credentials) -> Result<TokenPair, ApiError>;
}

/// Time-windowed sensor aggregates consumed by the dashboard.
#[allow(async_fn_in_trait)]
pub trait SensorApi {
    /// Per-equipment averages over `period` (`GET /aggregated-data`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-2xx status, or a
    /// malformed body.
    async fn aggregated_data(&self, period: Period, bearer: Option<&str>) -> Result<Vec<AggregatePoint>, ApiError>;
}

pub(crate) const TOKEN_PATH: &str = "/token";
pub(crate) const REGISTER_PATH: &str = "/register";
pub(crate) const AGGREGATED_DATA_PATH: &str = "/aggregated-data";

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn aggregated_data_url(base_url: &str, period: Period) -> String {
    format!("{}?period={}", join_url(base_url, AGGREGATED_DATA_PATH), period.as_query())
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// HTTP implementation of [`AuthApi`] and [`SensorApi`].
#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
    #[cfg(not(feature = "hydrate"))]
    client: reqwest::Client,
}

impl HttpApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            #[cfg(not(feature = "hydrate"))]
            client: reqwest::Client::new(),
        }
    }

    async fn post_credentials(&self, path: &str, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        let url = join_url(&self.base_url, path);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<TokenPair>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let resp = self
                .client
                .post(&url)
                .json(credentials)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.status().is_success() {
                return Err(ApiError::Status(resp.status().as_u16()));
            }
            resp.json::<TokenPair>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
    }
}

impl AuthApi for HttpApi {
    async fn obtain_token(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        self.post_credentials(TOKEN_PATH, credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        self.post_credentials(REGISTER_PATH, credentials).await
    }
}

impl SensorApi for HttpApi {
    async fn aggregated_data(&self, period: Period, bearer: Option<&str>) -> Result<Vec<AggregatePoint>, ApiError> {
        let url = aggregated_data_url(&self.base_url, period);
        #[cfg(feature = "hydrate")]
        {
            let mut req = gloo_net::http::Request::get(&url);
            if let Some(token) = bearer {
                req = req.header("Authorization", &bearer_header(token));
            }
            let resp = req.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<Vec<AggregatePoint>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let mut req = self.client.get(&url);
            if let Some(token) = bearer {
                req = req.header(reqwest::header::AUTHORIZATION, bearer_header(token));
            }
            let resp = req.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.status().is_success() {
                return Err(ApiError::Status(resp.status().as_u16()));
            }
            resp.json::<Vec<AggregatePoint>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
    }
}
