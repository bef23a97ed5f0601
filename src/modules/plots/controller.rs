//! PNG plots proxied from the analysis backend.
//!
//! Plots are rendered by the backend's pipeline; these handlers only pick
//! the right endpoint and pass the bytes through.

use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use prism_client::PlotImage;
use prism_core::{AppError, ErrorResponse};
use prism_models::{AssignmentId, AssignmentPlot, CourseId, CoursePlot, SemesterId};
use tracing::instrument;

use crate::metrics::track_plot_served;
use crate::middleware::auth::AuthSession;
use crate::modules::backend_failure;
use crate::state::AppState;

fn png_response(image: PlotImage) -> Response {
    (
        [
            (CONTENT_TYPE, image.content_type),
            (CACHE_CONTROL, "private, max-age=60".to_string()),
        ],
        image.bytes,
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/assignments/{assignment}/plots/{kind}",
    params(
        ("assignment" = i64, Path, description = "Assignment id"),
        ("kind" = AssignmentPlot, Path, description = "similarity, distribution or similarity-interval")
    ),
    responses(
        (status = 200, description = "Plot image", content_type = "image/png", body = Vec<u8>),
        (status = 303, description = "Session check redirect"),
        (status = 404, description = "Unknown plot kind or assignment", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Plots"
)]
#[instrument(skip_all, fields(assignment = %assignment, kind = %kind))]
pub async fn assignment_plot(
    State(state): State<AppState>,
    auth: AuthSession,
    Path((assignment, kind)): Path<(AssignmentId, String)>,
) -> Result<Response, AppError> {
    let plot: AssignmentPlot = kind.parse().map_err(|e: String| AppError::not_found(anyhow!(e)))?;

    let image = state
        .backend
        .assignment_plot(&auth.session, assignment, plot)
        .await
        .map_err(backend_failure)?;

    track_plot_served(plot.as_str());
    Ok(png_response(image))
}

#[utoipa::path(
    get,
    path = "/api/courses/{course}/semesters/{semester}/plots/{kind}",
    params(
        ("course" = i64, Path, description = "Course instance id"),
        ("semester" = i64, Path, description = "Semester id"),
        ("kind" = CoursePlot, Path, description = "kmeans-clusters or kmeans-pairs")
    ),
    responses(
        (status = 200, description = "Plot image", content_type = "image/png", body = Vec<u8>),
        (status = 303, description = "Session check redirect"),
        (status = 404, description = "Unknown plot kind or course", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Plots"
)]
#[instrument(skip_all, fields(course = %course, semester = %semester, kind = %kind))]
pub async fn course_plot(
    State(state): State<AppState>,
    auth: AuthSession,
    Path((course, semester, kind)): Path<(CourseId, SemesterId, String)>,
) -> Result<Response, AppError> {
    let plot: CoursePlot = kind.parse().map_err(|e: String| AppError::not_found(anyhow!(e)))?;

    let image = state
        .backend
        .course_plot(&auth.session, course, semester, plot)
        .await
        .map_err(backend_failure)?;

    track_plot_served(plot.as_str());
    Ok(png_response(image))
}
