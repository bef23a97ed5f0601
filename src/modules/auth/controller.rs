use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use prism_auth::{SessionState, is_token_valid};
use prism_client::Tokens;
use prism_core::{AppError, ErrorResponse};
use prism_models::GoogleVerifyRequest;
use tracing::{info, instrument, warn};

use crate::metrics::{track_login, track_logout, track_token_refresh};
use crate::modules::auth::model::{HealthResponse, LoginInfo, RefreshParams, SessionInfo};
use crate::modules::backend_failure;
use crate::state::AppState;
use crate::utils::cookies::{clear_tokens, cookie_value, store_tokens};
use crate::utils::redirect::safe_next;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Dashboard is up", body = HealthResponse)),
    tag = "Session"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Login page data, or a redirect home when already signed in.
#[utoipa::path(
    get,
    path = "/login",
    responses(
        (status = 200, description = "Not signed in", body = LoginInfo),
        (status = 303, description = "Already signed in, redirect to /")
    ),
    tag = "Session"
)]
#[instrument(skip_all)]
pub async fn login_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let config = &state.session_config;
    let access = cookie_value(&jar, &config.access_cookie);
    let refresh = cookie_value(&jar, &config.refresh_cookie);
    let session = SessionState::classify_now(access.as_deref(), refresh.as_deref(), config);

    if session == SessionState::AccessValid {
        return Redirect::to("/").into_response();
    }

    Json(LoginInfo {
        google_client_id: state.dashboard_config.google_client_id.clone(),
        session,
    })
    .into_response()
}

/// Exchanges a Google ID token for a backend session.
#[utoipa::path(
    post,
    path = "/login",
    request_body = GoogleVerifyRequest,
    responses(
        (status = 200, description = "Signed in; session cookies set", body = SessionInfo),
        (status = 400, description = "Google token rejected", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 429, description = "Too many attempts")
    ),
    tag = "Session"
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<GoogleVerifyRequest>,
) -> Result<(CookieJar, Json<SessionInfo>), AppError> {
    let login = match state.backend.google_verify(&dto.id_token).await {
        Ok(login) => login,
        Err(e) => {
            track_login(false);
            warn!(error = %e, "Google sign-in rejected");
            return Err(backend_failure(e));
        }
    };
    track_login(true);
    info!(user_id = %login.user.pk, "User signed in");

    let tokens = Tokens {
        access: Some(login.access),
        refresh: Some(login.refresh),
    };
    let jar = store_tokens(jar, &tokens, &state.session_config);

    Ok((
        jar,
        Json(SessionInfo {
            user: login.user,
            access_expiration: login.access_expiration,
            refresh_expiration: login.refresh_expiration,
            redirect: "/".to_string(),
        }),
    ))
}

/// Trades the refresh cookie for a new access cookie, then returns to `next`.
#[utoipa::path(
    get,
    path = "/refresh",
    params(RefreshParams),
    responses(
        (status = 303, description = "Refreshed, redirect to next; or redirect to /login or /logout")
    ),
    tag = "Session"
)]
#[instrument(skip_all)]
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<RefreshParams>,
) -> Response {
    let config = &state.session_config;
    let Some(refresh) = cookie_value(&jar, &config.refresh_cookie) else {
        return Redirect::to("/login").into_response();
    };

    if !is_token_valid(&refresh, Utc::now().timestamp(), config.expiry_leeway_secs) {
        track_token_refresh(false);
        return Redirect::to("/logout").into_response();
    }

    match state.backend.refresh_token(&refresh).await {
        Ok(tokens) => {
            track_token_refresh(true);
            let tokens = Tokens {
                access: Some(tokens.access),
                refresh: tokens.refresh,
            };
            let jar = store_tokens(jar, &tokens, config);
            let next = safe_next(params.next.as_deref());
            (jar, Redirect::to(&next)).into_response()
        }
        Err(e) => {
            track_token_refresh(false);
            warn!(error = %e, "Token refresh failed");
            Redirect::to("/logout").into_response()
        }
    }
}

/// Ends the session: best-effort backend logout, then clear cookies.
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 303, description = "Cookies cleared, redirect to /login")),
    tag = "Session"
)]
#[instrument(skip_all)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    let config = &state.session_config;

    if let Some(refresh) = cookie_value(&jar, &config.refresh_cookie) {
        if let Err(e) = state.backend.logout(&refresh).await {
            warn!(error = %e, "Backend logout failed, clearing cookies anyway");
        }
    }

    track_logout();
    (clear_tokens(jar, config), Redirect::to("/login"))
}
