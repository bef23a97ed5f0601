use crate::modules::courses::controller::{list_assignments, list_students, run_analysis};
use crate::modules::plots::controller::course_plot;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/{course}/assignments", get(list_assignments))
        .route("/{course}/students", get(list_students))
        .route("/{course}/semesters/{semester}/analysis", post(run_analysis))
        .route("/{course}/semesters/{semester}/plots/{kind}", get(course_plot))
}
