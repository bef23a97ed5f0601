use prism_client::{BackendClient, ClientError};
use prism_config::{BackendConfig, CorsConfig, DashboardConfig, RateLimitConfig, SessionConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub backend: BackendClient,
    pub session_config: SessionConfig,
    pub dashboard_config: DashboardConfig,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
}

pub fn init_app_state() -> Result<AppState, ClientError> {
    Ok(AppState {
        backend: BackendClient::new(&BackendConfig::from_env())?,
        session_config: SessionConfig::from_env(),
        dashboard_config: DashboardConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
    })
}
