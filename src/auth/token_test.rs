use super::*;
use crate::test_support::{fake_jwt, token_expiring_in};

const NOW: i64 = 1_700_000_000;

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decode_claims_reads_exp() {
    let token = fake_jwt(&serde_json::json!({"exp": NOW + 60}));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.expires_at_epoch_seconds, Some((NOW + 60) as f64));
}

#[test]
fn decode_claims_without_exp_is_none() {
    let token = fake_jwt(&serde_json::json!({"sub": "alice"}));
    assert_eq!(decode_claims(&token).unwrap().expires_at_epoch_seconds, None);
}

#[test]
fn decode_claims_tolerates_padding() {
    let token = fake_jwt(&serde_json::json!({"exp": 1}));
    let mut parts: Vec<String> = token.split('.').map(str::to_owned).collect();
    while parts[1].len() % 4 != 0 {
        parts[1].push('=');
    }
    assert!(decode_claims(&parts.join(".")).is_ok());
}

#[test]
fn decode_claims_missing_segment() {
    assert!(matches!(decode_claims("no-dots-here"), Err(TokenDecodeError::MissingClaims)));
}

#[test]
fn decode_claims_bad_base64() {
    assert!(matches!(decode_claims("a.!!!.c"), Err(TokenDecodeError::Base64(_))));
}

#[test]
fn decode_claims_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode("not json");
    assert!(matches!(decode_claims(&format!("h.{payload}.s")), Err(TokenDecodeError::Json(_))));
}

#[test]
fn decode_claims_non_numeric_exp_fails() {
    let token = fake_jwt(&serde_json::json!({"exp": "tomorrow"}));
    assert!(matches!(decode_claims(&token), Err(TokenDecodeError::NonNumericExp)));
}

#[test]
fn decode_claims_null_exp_is_none() {
    let token = fake_jwt(&serde_json::json!({"exp": null}));
    assert_eq!(decode_claims(&token).unwrap().expires_at_epoch_seconds, None);
}

#[test]
fn decode_claims_rejects_non_object_payloads() {
    for payload in ["[99999999999]", "99999999999", "\"exp\"", "null"] {
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload));
        assert!(
            matches!(decode_claims(&token), Err(TokenDecodeError::Json(_))),
            "payload {payload:?}"
        );
    }
}

#[test]
fn decode_claims_accepts_standard_alphabet() {
    use base64::engine::general_purpose::STANDARD_NO_PAD;

    // "~~~???>>>" encodes with both "+" and "/" in the standard alphabet.
    let payload = format!(r#"{{"exp":{},"note":"~~~???>>>"}}"#, NOW + 60);
    let standard = STANDARD_NO_PAD.encode(&payload);
    assert!(standard.contains('+') || standard.contains('/'), "{standard}");

    let claims = decode_claims(&format!("h.{standard}.s")).unwrap();
    assert_eq!(claims.expires_at_epoch_seconds, Some((NOW + 60) as f64));
}

// =============================================================
// is_valid_at
// =============================================================

#[test]
fn future_exp_is_valid() {
    let token = fake_jwt(&serde_json::json!({"exp": NOW + 1}));
    assert!(is_valid_at(&token, NOW));
}

#[test]
fn exp_equal_to_now_is_invalid() {
    let token = fake_jwt(&serde_json::json!({"exp": NOW}));
    assert!(!is_valid_at(&token, NOW));
}

#[test]
fn past_exp_is_invalid() {
    for offset in [1, 60, 86_400] {
        let token = fake_jwt(&serde_json::json!({"exp": NOW - offset}));
        assert!(!is_valid_at(&token, NOW), "offset {offset}");
    }
}

#[test]
fn missing_exp_is_invalid() {
    let token = fake_jwt(&serde_json::json!({"sub": "alice", "iat": NOW}));
    assert!(!is_valid_at(&token, NOW));
}

#[test]
fn garbage_is_invalid_without_panicking() {
    for token in ["", ".", "..", "abc", "a.b.c", "eyJ.eyJ.eyJ"] {
        assert!(!is_valid_at(token, NOW), "token {token:?}");
    }
}

#[test]
fn array_claims_segment_is_invalid() {
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("[99999999999]"));
    assert!(!is_valid_at(&token, NOW));
}

#[test]
fn fractional_exp_compares_numerically() {
    let token = fake_jwt(&serde_json::json!({"exp": NOW as f64 + 0.5}));
    assert!(is_valid_at(&token, NOW));
}

// =============================================================
// is_valid (wall clock)
// =============================================================

#[test]
fn is_valid_uses_current_time() {
    assert!(is_valid(&token_expiring_in(3600)));
    assert!(!is_valid(&token_expiring_in(-3600)));
}

#[test]
fn now_epoch_secs_is_after_2023() {
    assert!(now_epoch_secs() > NOW);
}
