use axum::{extract::FromRequestParts, http::request::Parts};
use prism_client::Session;
use prism_core::AppError;
use prism_models::CurrentUser;

/// The signed-in user and the tokens to call the backend with.
///
/// Inserted by [`crate::middleware::session::require_session`]; extracting
/// it on a route without that middleware fails with `401`.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session: Session,
    pub user: CurrentUser,
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthSession>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Not signed in"))
    }
}
