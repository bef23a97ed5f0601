use crate::modules::cheating::controller::{list_confirmed_cheaters, list_flagged_students};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_cheating_router() -> Router<AppState> {
    Router::new()
        .route("/flagged-students", get(list_flagged_students))
        .route("/confirmed-cheaters", get(list_confirmed_cheaters))
}
