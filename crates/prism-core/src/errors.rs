use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
    pub status: u16,
}

/// Error returned by dashboard handlers.
///
/// Serialises as `{"detail": "...", "status": 404}`, the same shape the
/// backend uses for its own failures, so the frontend only has one error
/// format to handle.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    /// Builds an error from a raw status code reported by a remote service.
    ///
    /// Unknown or non-error codes collapse to `502 Bad Gateway`.
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        let status = StatusCode::from_u16(status)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        Self::new(status, anyhow::anyhow!(detail.into()))
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow::anyhow!(message.into()))
    }

    /// The message placed in the `detail` field.
    pub fn detail(&self) -> String {
        self.error.to_string()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.error, self.status.as_u16())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
        }

        let body = Json(ErrorResponse {
            detail: self.error.to_string(),
            status: self.status.as_u16(),
        });

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_keeps_error_codes() {
        let err = AppError::from_status(404, "Not found.");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "Not found.");
    }

    #[test]
    fn test_from_status_maps_success_codes_to_bad_gateway() {
        let err = AppError::from_status(200, "odd");
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_from_status_maps_invalid_codes_to_bad_gateway() {
        let err = AppError::from_status(42, "odd");
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_unauthorized_status() {
        let err = AppError::unauthorized("Session expired");
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "Session expired (401)");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::bad_request(anyhow::anyhow!("bad")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
