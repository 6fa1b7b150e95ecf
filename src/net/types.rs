//! Shared wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the remote API's JSON (`username`, `access`,
//! `equipment_id`, `avg_value`) so serde round-trips stay lossless, while the
//! Rust-side names describe what the values mean to the dashboard.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The client-held pairing of a user identifier and its trusted bearer token.
///
/// Persisted as `{"username": ..., "token": ...}` so records written by older
/// builds of the dashboard rehydrate unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Username / email the user authenticated with.
    #[serde(rename = "username")]
    pub identifier: String,
    /// Opaque bearer credential issued by the remote API.
    pub token: String,
}

impl Session {
    #[must_use]
    pub fn new(identifier: impl Into<String>, token: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), token: token.into() }
    }
}

/// Login / registration request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(rename = "username")]
    pub identifier: String,
    #[serde(rename = "password")]
    pub secret: String,
}

impl Credentials {
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), secret: secret.into() }
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Token pair returned by the token-issuance and registration endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token; this is the bearer credential the session keeps.
    pub access: String,
    /// Refresh token. Parsed for completeness, never used.
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Time window accepted by the aggregation endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Period {
    #[default]
    Last24Hours,
    Last48Hours,
    LastWeek,
    LastMonth,
}

impl Period {
    /// All periods in selector order.
    pub const ALL: [Self; 4] = [Self::Last24Hours, Self::Last48Hours, Self::LastWeek, Self::LastMonth];

    /// Query-string value understood by `/aggregated-data?period=`.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::Last24Hours => "24h",
            Self::Last48Hours => "48h",
            Self::LastWeek => "1w",
            Self::LastMonth => "1m",
        }
    }

    /// Human label shown in the period selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Last24Hours => "24 hours",
            Self::Last48Hours => "48 hours",
            Self::LastWeek => "1 week",
            Self::LastMonth => "1 month",
        }
    }

    /// Parse a query-string value back into a period.
    #[must_use]
    pub fn from_query(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_query() == raw)
    }
}

/// One bar of the dashboard chart: an equipment and its mean sensor value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregatePoint {
    pub equipment_id: String,
    /// The backend averages a decimal column, so this arrives either as a JSON
    /// number or as a decimal string.
    #[serde(deserialize_with = "deserialize_f64_from_number_or_string")]
    pub avg_value: f64,
}

fn deserialize_f64_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|e| D::Error::custom(format!("avg_value {raw:?} is not numeric: {e}")))
            .map(Some)?,
        _ => return Err(D::Error::custom("expected number or numeric string")),
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(D::Error::custom(format!("expected finite number, got {value}"))),
    }
}
