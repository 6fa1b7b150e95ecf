//! Bearer token validity check.
//!
//! The client is not the trust boundary: claims are read without verifying
//! the signature, and only the expiration claim is consulted. A token with no
//! `exp` claim is treated as unusable rather than as "never expires".

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};

use super::error::TokenDecodeError;

/// Claims read from a token's payload segment. Only `exp` matters here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodedToken {
    /// Expiration as epoch seconds, if the token carries one.
    pub expires_at_epoch_seconds: Option<f64>,
}

/// Decode the claims segment of a JWT-shaped token without verifying it.
///
/// # Errors
///
/// Returns [`TokenDecodeError`] if the token has no second segment, the
/// segment is not base64, it does not hold a JSON claims object, or its
/// `exp` claim is not a number.
pub fn decode_claims(token: &str) -> Result<DecodedToken, TokenDecodeError> {
    let segment = token.split('.').nth(1).ok_or(TokenDecodeError::MissingClaims)?;
    // Padding and the standard `+`/`/` alphabet are accepted as well.
    let segment = segment.trim_end_matches('=').replace('+', "-").replace('/', "_");
    let raw = URL_SAFE_NO_PAD.decode(segment)?;
    // Only a JSON object is a claims set; arrays and scalars are rejected.
    let claims: Map<String, Value> = serde_json::from_slice(&raw)?;
    let expires_at_epoch_seconds = match claims.get("exp") {
        None | Some(Value::Null) => None,
        Some(exp) => Some(exp.as_f64().ok_or(TokenDecodeError::NonNumericExp)?),
    };
    Ok(DecodedToken { expires_at_epoch_seconds })
}

/// Whether `token` is usable at `now_epoch_secs`.
///
/// True iff the claims decode and `exp` is strictly in the future. No clock
/// skew tolerance is applied.
#[must_use]
pub fn is_valid_at(token: &str, now_epoch_secs: i64) -> bool {
    #[allow(clippy::cast_precision_loss)]
    let now = now_epoch_secs as f64;
    match decode_claims(token) {
        Ok(claims) => claims.expires_at_epoch_seconds.is_some_and(|exp| exp > now),
        Err(e) => {
            leptos::logging::warn!("token decode failed: {e}");
            false
        }
    }
}

/// Whether `token` is usable right now. Reads the wall clock on every call.
#[must_use]
pub fn is_valid(token: &str) -> bool {
    is_valid_at(token, now_epoch_secs())
}

/// Current wall-clock time in whole epoch seconds.
#[must_use]
pub fn now_epoch_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0).floor() as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
