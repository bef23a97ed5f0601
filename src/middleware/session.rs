//! Session check in front of every protected route.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use prism_auth::{SessionAction, SessionState, decode_claims};
use prism_client::Session;
use prism_models::CurrentUser;
use tracing::{debug, warn};

use crate::metrics::track_session_action;
use crate::middleware::auth::AuthSession;
use crate::state::AppState;
use crate::utils::cookies::{cookie_value, store_tokens};
use crate::utils::redirect::refresh_location;

/// Redirects per [`SessionAction`] unless the access token is live.
///
/// On `Continue` the request carries an [`AuthSession`]. If the backend
/// client refreshed the tokens while handling the request, the new values
/// are set as cookies on the response. A `401` that survives the client's
/// refresh retry ends the session with a redirect to `/logout`.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let config = &state.session_config;
    let access = cookie_value(&jar, &config.access_cookie);
    let refresh = cookie_value(&jar, &config.refresh_cookie);

    let session_state = SessionState::classify_now(access.as_deref(), refresh.as_deref(), config);
    let action = session_state.action();
    track_session_action(action);

    match action {
        SessionAction::Continue => {}
        SessionAction::RedirectRefresh => {
            let original = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or("/");
            debug!(state = %session_state, "Access token expired, refreshing");
            return Redirect::to(&refresh_location(original)).into_response();
        }
        SessionAction::RedirectLogin | SessionAction::RedirectLogout => {
            debug!(state = %session_state, "Session not usable");
            return Redirect::to(action.location().unwrap_or("/login")).into_response();
        }
    }

    let user = access
        .as_deref()
        .and_then(|token| decode_claims(token).ok())
        .and_then(|claims| CurrentUser::from_claims(&claims));
    let Some(user) = user else {
        warn!("Access token carries no user id");
        return Redirect::to("/logout").into_response();
    };

    let session = Session::new(access, refresh);
    req.extensions_mut().insert(AuthSession {
        session: session.clone(),
        user,
    });

    let response = next.run(req).await;

    if response.status() == StatusCode::UNAUTHORIZED {
        warn!("Backend rejected the session after refresh");
        return Redirect::to("/logout").into_response();
    }

    if session.was_refreshed() {
        debug!("Forwarding refreshed tokens");
        let jar = store_tokens(CookieJar::new(), &session.tokens(), config);
        return (jar, response).into_response();
    }

    response
}
