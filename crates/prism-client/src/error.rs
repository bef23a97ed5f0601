//! Backend failures and their mapping onto dashboard responses.

use reqwest::StatusCode;
use prism_core::AppError;
use serde::Deserialize;
use thiserror::Error;

/// A non-2xx answer from the backend, reduced to `{detail, status}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail} ({status})")]
pub struct ApiError {
    pub status: u16,
    pub detail: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<serde_json::Value>,
}

fn as_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        // DRF validation errors arrive as lists or field maps.
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items.into_iter().filter_map(as_text).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        other => Some(other.to_string()),
    }
}

impl ApiError {
    /// Picks `detail`, then `message`, then the status reason phrase.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.detail.and_then(as_text).or_else(|| body.message.and_then(as_text)));

        let detail = parsed.unwrap_or_else(|| {
            StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Request failed")
                .to_string()
        });

        Self { status, detail }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// No usable token remains; the user has to sign in again.
    #[error("session expired, please sign in again")]
    SessionExpired,
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unexpected backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(&self) -> StatusCode {
        match self {
            ClientError::Api(api) => StatusCode::from_u16(api.status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            ClientError::SessionExpired => StatusCode::UNAUTHORIZED,
            ClientError::Http(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            ClientError::Http(_) | ClientError::Decode(_) => StatusCode::BAD_GATEWAY,
            ClientError::InvalidUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == StatusCode::UNAUTHORIZED
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api(api) => AppError::from_status(api.status, api.detail),
            other => AppError::new(other.status(), other),
        }
    }
}
