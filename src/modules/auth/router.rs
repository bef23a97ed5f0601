use crate::modules::auth::controller::{login, login_page, logout, refresh};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route("/refresh", get(refresh))
        .route("/logout", get(logout).post(logout))
}
