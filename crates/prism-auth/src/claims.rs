//! JWT claim structure issued by the backend.
//!
//! Access and refresh tokens share one payload layout; `token_type`
//! tells them apart. The backend adds `professor_id` to every token it
//! mints for an instructor account.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Claims carried by access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenClaims {
    /// `"access"` or `"refresh"`
    #[serde(default)]
    pub token_type: Option<String>,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
    /// Issued-at timestamp (Unix seconds)
    #[serde(default)]
    pub iat: Option<i64>,
    /// Unique token identifier
    #[serde(default)]
    pub jti: Option<String>,
    /// Backend user primary key
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<i64>,
    /// Instructor record linked to the user, if any
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub professor_id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}

impl TokenClaims {
    /// True once `now + leeway` has reached `exp`.
    pub fn is_expired_at(&self, now: i64, leeway_secs: i64) -> bool {
        self.exp <= now.saturating_add(leeway_secs)
    }

    /// Seconds until expiry, never negative.
    pub fn seconds_remaining(&self, now: i64) -> i64 {
        self.exp.saturating_sub(now).max(0)
    }
}

/// Accepts ids serialised either as numbers or as numeric strings.
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(n)) => Ok(Some(n)),
        Some(RawId::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawId::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_access_claims() {
        let json = r#"{"token_type":"access","exp":1700000300,"iat":1700000000,"jti":"abc","user_id":7,"professor_id":3}"#;
        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.token_type.as_deref(), Some("access"));
        assert_eq!(claims.exp, 1_700_000_300);
        assert_eq!(claims.user_id, Some(7));
        assert_eq!(claims.professor_id, Some(3));
    }

    #[test]
    fn test_deserialize_string_ids() {
        let json = r#"{"exp":10,"user_id":"42","professor_id":null}"#;
        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.user_id, Some(42));
        assert_eq!(claims.professor_id, None);
    }

    #[test]
    fn test_missing_exp_is_rejected() {
        let json = r#"{"token_type":"access","user_id":1}"#;
        assert!(serde_json::from_str::<TokenClaims>(json).is_err());
    }

    #[test]
    fn test_expiry_boundaries() {
        let claims: TokenClaims = serde_json::from_str(r#"{"exp":100}"#).unwrap();
        assert!(!claims.is_expired_at(99, 0));
        assert!(claims.is_expired_at(100, 0));
        assert!(claims.is_expired_at(95, 5));
        assert_eq!(claims.seconds_remaining(40), 60);
        assert_eq!(claims.seconds_remaining(400), 0);
    }

    #[test]
    fn test_seconds_remaining_saturates_at_extreme_timestamps() {
        let far: TokenClaims =
            serde_json::from_str(&format!(r#"{{"exp":{}}}"#, i64::MAX)).unwrap();
        assert_eq!(far.seconds_remaining(i64::MIN), i64::MAX);
        assert_eq!(far.seconds_remaining(-1), i64::MAX);

        let past: TokenClaims =
            serde_json::from_str(&format!(r#"{{"exp":{}}}"#, i64::MIN)).unwrap();
        assert_eq!(past.seconds_remaining(i64::MAX), 0);
    }
}
