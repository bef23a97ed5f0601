use crate::modules::assignments::controller::{
    list_alerts, list_similarity_pairs, list_submissions,
};
use crate::modules::plots::controller::assignment_plot;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_assignments_router() -> Router<AppState> {
    Router::new()
        .route("/{assignment}/submissions", get(list_submissions))
        .route("/{assignment}/similarity-pairs", get(list_similarity_pairs))
        .route("/{assignment}/alerts", get(list_alerts))
        .route("/{assignment}/plots/{kind}", get(assignment_plot))
}
