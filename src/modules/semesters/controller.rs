use axum::{
    Json,
    extract::{Path, State},
};
use prism_core::{AppError, ErrorResponse};
use prism_models::{Course, Semester, SemesterId};
use tracing::instrument;

use crate::middleware::auth::AuthSession;
use crate::modules::backend_failure;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/semesters",
    responses(
        (status = 200, description = "Semesters the user teaches in", body = Vec<Semester>),
        (status = 303, description = "Session check redirect"),
        (status = 502, description = "Backend unavailable", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Courses"
)]
#[instrument(skip_all, fields(user_id = %auth.user.user_id))]
pub async fn list_semesters(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<Vec<Semester>>, AppError> {
    let semesters = state
        .backend
        .semesters(&auth.session, auth.user.user_id)
        .await
        .map_err(backend_failure)?;
    Ok(Json(semesters))
}

#[utoipa::path(
    get,
    path = "/api/semesters/{semester}/courses",
    params(("semester" = i64, Path, description = "Semester id")),
    responses(
        (status = 200, description = "Courses the user teaches in the semester", body = Vec<Course>),
        (status = 303, description = "Session check redirect"),
        (status = 404, description = "Semester not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Courses"
)]
#[instrument(skip_all, fields(user_id = %auth.user.user_id, semester = %semester))]
pub async fn list_courses(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(semester): Path<SemesterId>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = state
        .backend
        .courses(&auth.session, auth.user.user_id, semester)
        .await
        .map_err(backend_failure)?;
    Ok(Json(courses))
}
