use std::time::Duration;

use crate::env_or;

/// Location of the remote review API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Timeout in seconds for analysis pipeline runs, which take minutes.
    pub pipeline_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            pipeline_timeout_secs: 900,
        }
    }
}

impl BackendConfig {
    /// Loads from `PRISM_BACKEND_URL`, `PRISM_BACKEND_TIMEOUT_SECS` and
    /// `PRISM_PIPELINE_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self::new(
            std::env::var("PRISM_BACKEND_URL").unwrap_or(defaults.base_url),
            env_or("PRISM_BACKEND_TIMEOUT_SECS", defaults.timeout_secs),
        )
        .with_pipeline_timeout(env_or(
            "PRISM_PIPELINE_TIMEOUT_SECS",
            defaults.pipeline_timeout_secs,
        ))
    }

    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs,
            pipeline_timeout_secs: Self::default().pipeline_timeout_secs,
        }
    }

    #[must_use]
    pub fn with_pipeline_timeout(mut self, secs: u64) -> Self {
        self.pipeline_timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Never shorter than [`BackendConfig::timeout`].
    pub fn pipeline_timeout(&self) -> Duration {
        Duration::from_secs(self.pipeline_timeout_secs).max(self.timeout())
    }
}
