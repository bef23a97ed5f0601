use crate::modules::overview::controller::{me, overview};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_overview_router() -> Router<AppState> {
    Router::new()
        .route("/", get(overview))
        .route("/api/me", get(me))
}
