use chrono::{DateTime, Utc};
use prism_auth::SessionState;
use prism_models::LoginUser;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// What the login page needs to render the Google Sign-In button.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginInfo {
    pub google_client_id: Option<String>,
    /// Current state of the browser's session cookies
    pub session: SessionState,
}

/// Returned after a successful sign-in. Tokens travel only as cookies.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionInfo {
    pub user: LoginUser,
    pub access_expiration: Option<DateTime<Utc>>,
    pub refresh_expiration: Option<DateTime<Utc>>,
    /// Where the client should go next
    pub redirect: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RefreshParams {
    /// Same-site path to return to after the refresh
    pub next: Option<String>,
}
