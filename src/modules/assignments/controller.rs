use axum::{
    Json,
    extract::{Path, State},
};
use prism_core::{AppError, ErrorResponse, Page, PageParams};
use prism_models::{AlertParams, AssignmentId, SimilarityPair, Submission};
use tracing::{debug, instrument};

use crate::metrics::track_alerts;
use crate::middleware::auth::AuthSession;
use crate::modules::assignments::model::AlertsResponse;
use crate::modules::backend_failure;
use crate::state::AppState;
use crate::validator::ValidatedQuery;

#[utoipa::path(
    get,
    path = "/api/assignments/{assignment}/submissions",
    params(("assignment" = i64, Path, description = "Assignment id"), PageParams),
    responses(
        (status = 200, description = "One page of submissions", body = Page<Submission>),
        (status = 303, description = "Session check redirect"),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Assignments"
)]
#[instrument(skip_all, fields(assignment = %assignment))]
pub async fn list_submissions(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(assignment): Path<AssignmentId>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> Result<Json<Page<Submission>>, AppError> {
    let page = state
        .backend
        .submissions(&auth.session, assignment, &params)
        .await
        .map_err(backend_failure)?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/assignments/{assignment}/similarity-pairs",
    params(("assignment" = i64, Path, description = "Assignment id"), PageParams),
    responses(
        (status = 200, description = "One page of pairs, highest percentage first", body = Page<SimilarityPair>),
        (status = 303, description = "Session check redirect"),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Assignments"
)]
#[instrument(skip_all, fields(assignment = %assignment))]
pub async fn list_similarity_pairs(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(assignment): Path<AssignmentId>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> Result<Json<Page<SimilarityPair>>, AppError> {
    let page = state
        .backend
        .similarity_pairs(&auth.session, assignment, &params)
        .await
        .map_err(backend_failure)?;
    Ok(Json(page))
}

/// Pairs whose percentage meets the threshold.
///
/// Without `threshold` the configured `ALERT_THRESHOLD` applies.
#[utoipa::path(
    get,
    path = "/api/assignments/{assignment}/alerts",
    params(("assignment" = i64, Path, description = "Assignment id"), AlertParams),
    responses(
        (status = 200, description = "Alerts for the assignment", body = AlertsResponse),
        (status = 303, description = "Session check redirect"),
        (status = 400, description = "Threshold is not a number", body = ErrorResponse),
        (status = 422, description = "Threshold out of range", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Assignments"
)]
#[instrument(skip_all, fields(assignment = %assignment))]
pub async fn list_alerts(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(assignment): Path<AssignmentId>,
    ValidatedQuery(params): ValidatedQuery<AlertParams>,
) -> Result<Json<AlertsResponse>, AppError> {
    let threshold = params.threshold_or(state.dashboard_config.alert_threshold);
    let results = state
        .backend
        .alerts(&auth.session, assignment, threshold)
        .await
        .map_err(backend_failure)?;

    debug!(threshold, count = results.len(), "Alerts computed");
    track_alerts(results.len());

    Ok(Json(AlertsResponse {
        assignment,
        threshold,
        count: results.len(),
        results,
    }))
}
