//! Unverified JWT decoding.
//!
//! The signing key lives with the backend, so the dashboard only reads the
//! payload. Decoded claims drive routing decisions and display; they are
//! never trusted for authorization, which the backend enforces on every
//! request.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use crate::claims::TokenClaims;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("token is empty")]
    Empty,
    #[error("malformed token: {0}")]
    Malformed(String),
}

fn unverified_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();
    validation
}

/// Reads the claims of `token` without checking its signature or expiry.
///
/// # Errors
///
/// Returns [`AuthError::Empty`] for a blank string and
/// [`AuthError::Malformed`] when the token is not a JWT or lacks `exp`.
pub fn decode_claims(token: &str) -> Result<TokenClaims, AuthError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::Empty);
    }

    decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &unverified_validation())
        .map(|data| data.claims)
        .map_err(|e| AuthError::Malformed(e.to_string()))
}

/// True iff `token` decodes and has not expired at `now` (Unix seconds).
pub fn is_token_valid(token: &str, now: i64, leeway_secs: i64) -> bool {
    decode_claims(token)
        .map(|claims| !claims.is_expired_at(now, leeway_secs))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    fn mint(payload: serde_json::Value) -> String {
        encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(b"backend-only-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_ignores_signature() {
        let token = mint(json!({"token_type": "access", "exp": 2_000, "user_id": 9}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, 2_000);
        assert_eq!(claims.user_id, Some(9));
    }

    #[test]
    fn test_decode_ignores_expiry() {
        let token = mint(json!({"exp": 1}));
        assert_eq!(decode_claims(&token).unwrap().exp, 1);
    }

    #[test]
    fn test_decode_rejects_blank() {
        assert_eq!(decode_claims("  "), Err(AuthError::Empty));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_claims("not-a-jwt"),
            Err(AuthError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_rejects_missing_exp() {
        let token = mint(json!({"user_id": 1}));
        assert!(matches!(decode_claims(&token), Err(AuthError::Malformed(_))));
    }

    #[test]
    fn test_is_token_valid() {
        let token = mint(json!({"exp": 1_000}));
        assert!(is_token_valid(&token, 999, 0));
        assert!(!is_token_valid(&token, 1_000, 0));
        assert!(!is_token_valid(&token, 990, 10));
        assert!(!is_token_valid("garbage", 0, 0));
    }
}
