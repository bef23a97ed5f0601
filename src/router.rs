use std::sync::Arc;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::session::require_session;
use crate::modules::assignments::router::init_assignments_router;
use crate::modules::auth::controller::health;
use crate::modules::auth::router::init_auth_router;
use crate::modules::cheating::router::init_cheating_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::overview::router::init_overview_router;
use crate::modules::semesters::router::init_semesters_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Router, middleware};
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

fn session_routes(state: &AppState) -> Router<AppState> {
    let router = init_auth_router();
    if !state.rate_limit_config.enabled {
        return router;
    }

    match state.rate_limit_config.auth_governor_config() {
        Some(config) => router.layer(GovernorLayer::new(Arc::new(config))),
        None => {
            warn!("Invalid rate limit settings, session routes are not throttled");
            router
        }
    }
}

fn protected_routes(state: &AppState) -> Router<AppState> {
    init_overview_router()
        .nest(
            "/api",
            Router::new()
                .nest("/semesters", init_semesters_router())
                .nest("/courses", init_courses_router())
                .nest("/assignments", init_assignments_router())
                .merge(init_cheating_router()),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/health", get(health))
        .merge(session_routes(&state))
        .merge(protected_routes(&state))
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
