//! Session cookies holding the backend's JWTs.
//!
//! Both cookies are HttpOnly, `SameSite=Lax` and scoped to `/`. A cookie's
//! `Max-Age` follows its token's `exp` so the browser drops it when the
//! token dies.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use prism_auth::decode_claims;
use prism_client::Tokens;
use prism_config::SessionConfig;

pub fn cookie_value(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(|c| c.value().trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Builds a cookie for `token`, expiring with the token itself.
pub fn token_cookie(name: &str, token: &str, secure: bool) -> Cookie<'static> {
    let mut builder = Cookie::build((name.to_string(), token.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax);

    if let Ok(claims) = decode_claims(token) {
        let remaining = claims.seconds_remaining(Utc::now().timestamp());
        builder = builder.max_age(time::Duration::seconds(remaining));
    }

    builder.build()
}

/// Adds cookies for whichever tokens are present.
pub fn store_tokens(jar: CookieJar, tokens: &Tokens, config: &SessionConfig) -> CookieJar {
    let mut jar = jar;
    if let Some(access) = &tokens.access {
        jar = jar.add(token_cookie(&config.access_cookie, access, config.secure_cookies));
    }
    if let Some(refresh) = &tokens.refresh {
        jar = jar.add(token_cookie(&config.refresh_cookie, refresh, config.secure_cookies));
    }
    jar
}

/// Expires both session cookies.
pub fn clear_tokens(jar: CookieJar, config: &SessionConfig) -> CookieJar {
    jar.remove(Cookie::build(config.access_cookie.clone()).path("/"))
        .remove(Cookie::build(config.refresh_cookie.clone()).path("/"))
}
