//! # PRISM Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`backend`]: Remote API location and request timeout
//! - [`session`]: Session cookie names, flags and expiry leeway
//! - [`dashboard`]: Listen address, OAuth client id, alert threshold
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`rate_limit`]: Rate limiting for the auth routes
//!
//! # Example
//!
//! ```ignore
//! use prism_config::{BackendConfig, SessionConfig};
//!
//! let backend = BackendConfig::from_env();
//! let session = SessionConfig::from_env();
//! ```

pub mod backend;
pub mod cors;
pub mod dashboard;
pub mod rate_limit;
pub mod session;

pub use backend::BackendConfig;
pub use cors::CorsConfig;
pub use dashboard::DashboardConfig;
pub use rate_limit::RateLimitConfig;
pub use session::SessionConfig;

/// Reads an environment variable and parses it, falling back to `default`
/// when unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Reads a boolean flag. Accepts `true/false`, `1/0`, `yes/no`.
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
