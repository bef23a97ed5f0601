use std::time::Duration;

use prism_config::BackendConfig;
use prism_models::{TokenRefreshRequest, TokenRefreshResponse};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ApiError, ClientError};
use crate::session::Session;

pub(crate) const REFRESH_PATH: &str = "/api/token/refresh";

/// Connection-pooled client for the review API.
///
/// Cloning is cheap; every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    pipeline_timeout: Duration,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!("prism-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            pipeline_timeout: config.pipeline_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/logout`.
    pub(crate) fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(Url::parse(&format!("{}{path}", self.base_url))?)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn pipeline_timeout(&self) -> Duration {
        self.pipeline_timeout
    }

    /// Sends an unauthenticated request and checks its status.
    pub(crate) async fn send_public(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        check_status(response).await
    }

    /// Sends a request with the session's bearer token.
    ///
    /// `build` is called again with a fresh access token when the first
    /// attempt is rejected with `401`. A second `401` is returned as is.
    pub(crate) async fn send_authed<F>(
        &self,
        session: &Session,
        build: F,
    ) -> Result<Response, ClientError>
    where
        F: Fn(&reqwest::Client) -> Result<RequestBuilder, ClientError>,
    {
        let access = match session.access() {
            Some(access) => access,
            None => self.refresh_session(session).await?,
        };

        let response = build(&self.http)?.bearer_auth(&access).send().await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return check_status(response).await;
        }

        debug!(url = %response.url(), "access token rejected, refreshing");
        let access = self.refresh_session(session).await?;
        let response = build(&self.http)?.bearer_auth(&access).send().await?;
        check_status(response).await
    }

    pub(crate) async fn get_json<T>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        let response = self
            .send_authed(session, |http| Ok(http.get(url.clone()).query(query)))
            .await?;
        decode(response).await
    }

    /// Exchanges the session's refresh token for a new access token.
    ///
    /// Any rejection from the backend ends the session.
    pub async fn refresh_session(&self, session: &Session) -> Result<String, ClientError> {
        let refresh = session.refresh().ok_or(ClientError::SessionExpired)?;

        match self.refresh_token(&refresh).await {
            Ok(tokens) => {
                session.update(tokens.access.clone(), tokens.refresh);
                Ok(tokens.access)
            }
            Err(ClientError::Api(err)) => {
                warn!(status = err.status, detail = %err.detail, "token refresh rejected");
                Err(ClientError::SessionExpired)
            }
            Err(err) => Err(err),
        }
    }

    /// `POST /api/token/refresh`
    pub async fn refresh_token(&self, refresh: &str) -> Result<TokenRefreshResponse, ClientError> {
        let url = self.url(REFRESH_PATH)?;
        let body = TokenRefreshRequest {
            refresh: refresh.to_string(),
        };
        let response = self.send_public(self.http.post(url).json(&body)).await?;
        decode(response).await
    }
}

pub(crate) async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => {
            debug!(%url, status = status.as_u16(), error = %e, "could not read error body");
            Default::default()
        }
    };
    let err = ApiError::from_body(status.as_u16(), &body);
    debug!(%url, status = err.status, detail = %err.detail, "backend returned an error");
    Err(err.into())
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
