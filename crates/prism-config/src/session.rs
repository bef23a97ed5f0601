//! Session cookie configuration.
//!
//! The dashboard keeps the backend's access and refresh JWTs in two
//! HttpOnly cookies. Environment variables:
//!
//! - `SESSION_ACCESS_COOKIE`: access token cookie name (default: `access_token`)
//! - `SESSION_REFRESH_COOKIE`: refresh token cookie name (default: `refresh_token`)
//! - `SESSION_COOKIE_SECURE`: set the `Secure` attribute (default: `false`)
//! - `SESSION_EXPIRY_LEEWAY_SECS`: seconds before `exp` at which a token
//!   already counts as expired (default: `0`)

use crate::{env_flag, env_or};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub access_cookie: String,
    pub refresh_cookie: String,
    pub secure_cookies: bool,
    pub expiry_leeway_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            access_cookie: "access_token".to_string(),
            refresh_cookie: "refresh_token".to_string(),
            secure_cookies: false,
            expiry_leeway_secs: 0,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_cookie: std::env::var("SESSION_ACCESS_COOKIE")
                .unwrap_or(defaults.access_cookie),
            refresh_cookie: std::env::var("SESSION_REFRESH_COOKIE")
                .unwrap_or(defaults.refresh_cookie),
            secure_cookies: env_flag("SESSION_COOKIE_SECURE", defaults.secure_cookies),
            expiry_leeway_secs: env_or("SESSION_EXPIRY_LEEWAY_SECS", defaults.expiry_leeway_secs)
                .max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cookie_names() {
        let config = SessionConfig::default();
        assert_eq!(config.access_cookie, "access_token");
        assert_eq!(config.refresh_cookie, "refresh_token");
        assert!(!config.secure_cookies);
        assert_eq!(config.expiry_leeway_secs, 0);
    }
}
