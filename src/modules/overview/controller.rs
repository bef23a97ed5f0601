use axum::{Json, extract::State};
use prism_core::{AppError, ErrorResponse};
use prism_models::CurrentUser;
use tracing::instrument;

use crate::middleware::auth::AuthSession;
use crate::modules::backend_failure;
use crate::modules::overview::model::Overview;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Signed-in user and their semesters", body = Overview),
        (status = 303, description = "Session check redirect"),
        (status = 502, description = "Backend unavailable", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Dashboard"
)]
#[instrument(skip_all, fields(user_id = %auth.user.user_id))]
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<Overview>, AppError> {
    let semesters = state
        .backend
        .semesters(&auth.session, auth.user.user_id)
        .await
        .map_err(backend_failure)?;

    Ok(Json(Overview {
        user: auth.user,
        semesters,
    }))
}

#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Current user from the access token", body = CurrentUser),
        (status = 303, description = "Session check redirect")
    ),
    security(("session_cookie" = [])),
    tag = "Dashboard"
)]
pub async fn me(auth: AuthSession) -> Json<CurrentUser> {
    Json(auth.user)
}
