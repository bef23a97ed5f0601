use std::time::Instant;

use axum::{
    Json,
    extract::{Path, State},
};
use prism_core::{AppError, ErrorResponse};
use prism_models::{AnalysisRun, Assignment, CourseId, SemesterId, Student};
use tracing::{info, instrument};

use crate::metrics::track_backend_duration;
use crate::middleware::auth::AuthSession;
use crate::modules::backend_failure;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/courses/{course}/assignments",
    params(("course" = i64, Path, description = "Course instance id")),
    responses(
        (status = 200, description = "Assignments of the course", body = Vec<Assignment>),
        (status = 303, description = "Session check redirect"),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Courses"
)]
#[instrument(skip_all, fields(course = %course))]
pub async fn list_assignments(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(course): Path<CourseId>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let assignments = state
        .backend
        .assignments(&auth.session, course)
        .await
        .map_err(backend_failure)?;
    Ok(Json(assignments))
}

#[utoipa::path(
    get,
    path = "/api/courses/{course}/students",
    params(("course" = i64, Path, description = "Course instance id")),
    responses(
        (status = 200, description = "Students enrolled in the course", body = Vec<Student>),
        (status = 303, description = "Session check redirect"),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Courses"
)]
#[instrument(skip_all, fields(course = %course))]
pub async fn list_students(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(course): Path<CourseId>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state
        .backend
        .students(&auth.session, course)
        .await
        .map_err(backend_failure)?;
    Ok(Json(students))
}

/// Runs the comparison pipeline for a course offering.
///
/// Blocks until the backend finishes, which can take minutes.
#[utoipa::path(
    post,
    path = "/api/courses/{course}/semesters/{semester}/analysis",
    params(
        ("course" = i64, Path, description = "Course instance id"),
        ("semester" = i64, Path, description = "Semester id")
    ),
    responses(
        (status = 200, description = "Pipeline finished", body = AnalysisRun),
        (status = 303, description = "Session check redirect"),
        (status = 502, description = "Pipeline failed", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Analysis"
)]
#[instrument(skip_all, fields(course = %course, semester = %semester))]
pub async fn run_analysis(
    State(state): State<AppState>,
    auth: AuthSession,
    Path((course, semester)): Path<(CourseId, SemesterId)>,
) -> Result<Json<AnalysisRun>, AppError> {
    info!(user_id = %auth.user.user_id, "Starting analysis run");
    let start = Instant::now();

    let run = state
        .backend
        .run_pipeline(&auth.session, course, semester)
        .await
        .map_err(backend_failure)?;

    track_backend_duration("run_pipeline", start.elapsed().as_secs_f64());
    Ok(Json(run))
}
