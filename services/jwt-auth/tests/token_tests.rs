//! Wire-format and rejection tests for issued tokens.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use jwt_auth::{SigningSecret, TokenError, TokenService};
use serde_json::{json, Value};

const SECRET: &str = "integration-test-secret";

fn service() -> TokenService {
    TokenService::new(&SigningSecret::new(SECRET).unwrap())
}

fn decode_segment(segment: &str) -> Value {
    serde_json::from_slice(&URL_SAFE_NO_PAD.decode(segment).unwrap()).unwrap()
}

fn forge(algorithm: Algorithm, payload: &Value) -> String {
    encode(
        &Header::new(algorithm),
        payload,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_extract_username_returns_subject() {
    let service = service();
    let token = service.issue("alice").unwrap();
    assert_eq!(service.extract_username(&token).unwrap(), "alice");
}

#[test]
fn test_compact_serialization() {
    let token = service().issue("alice").unwrap();
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3, "JWT must have 3 parts");

    let header = decode_segment(parts[0]);
    assert_eq!(header["alg"], "HS512");
    assert_eq!(header["typ"], "JWT");

    let payload = decode_segment(parts[1]);
    let object = payload.as_object().unwrap();
    assert_eq!(object.len(), 3, "only sub, iat and exp are issued");
    assert_eq!(payload["sub"], "alice");

    let iat = payload["iat"].as_i64().unwrap();
    let exp = payload["exp"].as_i64().unwrap();
    assert_eq!(exp - iat, 18000);

    // 64-byte HMAC-SHA-512 tag
    assert_eq!(URL_SAFE_NO_PAD.decode(parts[2]).unwrap().len(), 64);
}

#[test]
fn test_token_readable_by_standard_library() {
    let token = service().issue("alice").unwrap();

    let mut validation = jsonwebtoken::Validation::new(Algorithm::HS512);
    validation.set_required_spec_claims(&["exp", "sub"]);
    let data = jsonwebtoken::decode::<Value>(
        &token,
        &jsonwebtoken::DecodingKey::from_secret(SECRET.as_bytes()),
        &validation,
    )
    .unwrap();

    assert_eq!(data.claims["sub"], "alice");
}

#[test]
fn test_expired_token_still_extracts() {
    let service = service().with_validity(Duration::seconds(-10));
    let token = service.issue("alice").unwrap();

    assert_eq!(service.extract_username(&token).unwrap(), "alice");
    assert!(service.extract_expiry(&token).unwrap() < Utc::now());
    assert_eq!(service.verify(&token, "alice"), Ok(false));
}

#[test]
fn test_malformed_inputs() {
    let service = service();
    for input in ["", "abc", "a.b", "a.b.c", "!!!.???.***"] {
        let err = service.extract_username(input).unwrap_err();
        assert!(
            matches!(err, TokenError::Malformed { .. }),
            "{input:?} gave {err:?}"
        );
        assert!(err.is_invalid_token());
    }
}

#[test]
fn test_unsigned_token_rejected() {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"alice","iat":0,"exp":9999999999}"#);
    let token = format!("{header}.{payload}.");

    let err = service().verify(&token, "alice").unwrap_err();
    assert!(err.is_invalid_token());
}

#[test]
fn test_weaker_algorithm_rejected() {
    let now = Utc::now().timestamp();
    let token = forge(
        Algorithm::HS256,
        &json!({"sub": "alice", "iat": now, "exp": now + 60}),
    );

    assert_eq!(
        service().extract_username(&token),
        Err(TokenError::SignatureMismatch)
    );
}

#[test]
fn test_missing_subject_rejected() {
    let now = Utc::now().timestamp();
    let token = forge(Algorithm::HS512, &json!({"iat": now, "exp": now + 60}));

    assert_eq!(
        service().extract_username(&token),
        Err(TokenError::claims_invalid("sub"))
    );
}

#[test]
fn test_missing_expiry_rejected() {
    let now = Utc::now().timestamp();
    let token = forge(Algorithm::HS512, &json!({"sub": "alice", "iat": now}));

    assert_eq!(
        service().verify(&token, "alice"),
        Err(TokenError::claims_invalid("exp"))
    );
}

#[test]
fn test_tampered_payload_rejected() {
    let service = service();
    let token = service.issue("alice").unwrap();
    let parts: Vec<&str> = token.split('.').collect();

    let mut payload = decode_segment(parts[1]);
    payload["sub"] = json!("mallory");
    let forged_payload = URL_SAFE_NO_PAD.encode(payload.to_string());
    let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

    assert_eq!(
        service.verify(&forged, "mallory"),
        Err(TokenError::SignatureMismatch)
    );
}

#[test]
fn test_service_shared_across_threads() {
    let service = std::sync::Arc::new(service());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = service.clone();
            std::thread::spawn(move || {
                let username = format!("user-{i}");
                let token = service.issue(&username).unwrap();
                service.verify(&token, &username).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
