//! Rate limiting for the session routes.
//!
//! `/login`, `/refresh` and `/logout` each call out to the backend, so they
//! are throttled per client IP with a token bucket:
//!
//! - `RATE_LIMIT_ENABLED`: turn the limiter on or off (default: true)
//! - `RATE_LIMIT_AUTH_PER_SECOND`: seconds between token replenishments (default: 2)
//! - `RATE_LIMIT_AUTH_BURST_SIZE`: bucket size (default: 10)

use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::SmartIpKeyExtractor;

use crate::{env_flag, env_or};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub auth_per_second: u64,
    pub auth_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auth_per_second: 2,
            auth_burst_size: 10,
        }
    }
}

impl RateLimitConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_flag("RATE_LIMIT_ENABLED", defaults.enabled),
            auth_per_second: env_or("RATE_LIMIT_AUTH_PER_SECOND", defaults.auth_per_second),
            auth_burst_size: env_or("RATE_LIMIT_AUTH_BURST_SIZE", defaults.auth_burst_size),
        }
    }

    /// A disabled limiter, for tests and local tooling.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Governor configuration keyed on the client IP.
    ///
    /// The key comes from `X-Forwarded-For`, `X-Real-Ip` or `Forwarded`, then
    /// the peer address.
    ///
    /// Returns `None` when disabled or when the values cannot form a valid
    /// bucket (zero rate or burst).
    #[must_use]
    pub fn auth_governor_config(
        &self,
    ) -> Option<GovernorConfig<SmartIpKeyExtractor, ::governor::middleware::NoOpMiddleware>> {
        if !self.enabled {
            return None;
        }

        GovernorConfigBuilder::default()
            .per_second(self.auth_per_second)
            .burst_size(self.auth_burst_size)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
    }
}
