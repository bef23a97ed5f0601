use crate::modules::semesters::controller::{list_courses, list_semesters};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_semesters_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_semesters))
        .route("/{semester}/courses", get(list_courses))
}
