use crate::env_or;

/// Settings for the dashboard server itself.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Socket address to bind, `SERVER_ADDR` (default `0.0.0.0:3000`).
    pub server_addr: String,
    /// OAuth client id handed to the login page, `GOOGLE_CLIENT_ID`.
    pub google_client_id: Option<String>,
    /// Minimum similarity percentage reported as an alert, `ALERT_THRESHOLD`.
    pub alert_threshold: u8,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:3000".to_string(),
            google_client_id: None,
            alert_threshold: 50,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_addr: std::env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            google_client_id: std::env::var("GOOGLE_CLIENT_ID")
                .ok()
                .filter(|id| !id.trim().is_empty()),
            alert_threshold: env_or("ALERT_THRESHOLD", defaults.alert_threshold).min(100),
        }
    }
}
