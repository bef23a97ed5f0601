use prism_models::{GoogleVerifyRequest, LoginResponse, LogoutRequest};
use tracing::info;

use crate::client::{BackendClient, decode};
use crate::error::ClientError;

impl BackendClient {
    /// `POST /api/google/verify`: trades a Google ID token for a token pair.
    pub async fn google_verify(&self, id_token: &str) -> Result<LoginResponse, ClientError> {
        let url = self.url("/api/google/verify")?;
        let body = GoogleVerifyRequest {
            id_token: id_token.to_string(),
        };
        let response = self.send_public(self.http().post(url).json(&body)).await?;
        let login: LoginResponse = decode(response).await?;
        info!(user_id = %login.user.pk, "backend accepted google sign-in");
        Ok(login)
    }

    /// `POST /api/logout`: blacklists the refresh token.
    ///
    /// The response body is ignored; only the status matters.
    pub async fn logout(&self, refresh: &str) -> Result<(), ClientError> {
        let url = self.url("/api/logout")?;
        let body = LogoutRequest {
            refresh: refresh.to_string(),
        };
        self.send_public(self.http().post(url).json(&body)).await?;
        Ok(())
    }
}
