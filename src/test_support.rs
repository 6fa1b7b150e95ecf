//! Shared fixtures for unit tests.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::auth::token::now_epoch_secs;

/// Assemble an unsigned JWT-shaped token carrying `claims`.
pub(crate) fn fake_jwt(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

/// Token whose `exp` is `offset_secs` from now (negative = already expired).
pub(crate) fn token_expiring_in(offset_secs: i64) -> String {
    fake_jwt(&serde_json::json!({
        "token_type": "access",
        "user_id": 1,
        "exp": now_epoch_secs() + offset_secs,
    }))
}
