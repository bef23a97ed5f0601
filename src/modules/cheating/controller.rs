use axum::{Json, extract::State};
use prism_core::{AppError, ErrorResponse};
use prism_models::{ConfirmedCheater, FlaggedStudent};
use tracing::instrument;

use crate::middleware::auth::AuthSession;
use crate::modules::backend_failure;
use crate::modules::cheating::model::ConfirmedCheatersParams;
use crate::state::AppState;
use crate::validator::ValidatedQuery;

/// Students flagged by the signed-in instructor.
#[utoipa::path(
    get,
    path = "/api/flagged-students",
    responses(
        (status = 200, description = "Flagged students", body = Vec<FlaggedStudent>),
        (status = 303, description = "Session check redirect"),
        (status = 502, description = "Backend unavailable", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Cheating"
)]
#[instrument(skip_all, fields(professor = ?auth.user.professor_id))]
pub async fn list_flagged_students(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<Vec<FlaggedStudent>>, AppError> {
    let flagged = state
        .backend
        .flagged_students(&auth.session, auth.user.professor_id)
        .await
        .map_err(backend_failure)?;
    Ok(Json(flagged))
}

#[utoipa::path(
    get,
    path = "/api/confirmed-cheaters",
    params(ConfirmedCheatersParams),
    responses(
        (status = 200, description = "Confirmed cheaters", body = Vec<ConfirmedCheater>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 303, description = "Session check redirect"),
        (status = 502, description = "Backend unavailable", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Cheating"
)]
#[instrument(skip_all, fields(assignment = ?params.assignment))]
pub async fn list_confirmed_cheaters(
    State(state): State<AppState>,
    auth: AuthSession,
    ValidatedQuery(params): ValidatedQuery<ConfirmedCheatersParams>,
) -> Result<Json<Vec<ConfirmedCheater>>, AppError> {
    let cheaters = state
        .backend
        .confirmed_cheaters(&auth.session, params.assignment)
        .await
        .map_err(backend_failure)?;
    Ok(Json(cheaters))
}
