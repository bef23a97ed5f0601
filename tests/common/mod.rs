#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use prism::router::init_router;
use prism::state::AppState;
use prism_client::BackendClient;
use prism_config::{BackendConfig, CorsConfig, DashboardConfig, RateLimitConfig, SessionConfig};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const USER_ID: i64 = 7;
pub const PROFESSOR_ID: i64 = 3;

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Mints a token the way the backend does; the dashboard never checks
/// the signature, so any key works.
pub fn mint_token(kind: &str, exp_offset_secs: i64) -> String {
    encode(
        &Header::default(),
        &json!({
            "token_type": kind,
            "exp": now() + exp_offset_secs,
            "iat": now(),
            "jti": uuid::Uuid::new_v4().to_string(),
            "user_id": USER_ID,
            "professor_id": PROFESSOR_ID,
        }),
        &EncodingKey::from_secret(b"backend-secret"),
    )
    .unwrap()
}

pub fn valid_access() -> String {
    mint_token("access", 300)
}

pub fn expired_access() -> String {
    mint_token("access", -60)
}

pub fn valid_refresh() -> String {
    mint_token("refresh", 86_400)
}

pub fn expired_refresh() -> String {
    mint_token("refresh", -60)
}

pub fn test_state(backend_url: &str, rate_limit_config: RateLimitConfig) -> AppState {
    AppState {
        backend: BackendClient::new(&BackendConfig::new(backend_url, 5)).unwrap(),
        session_config: SessionConfig::default(),
        dashboard_config: DashboardConfig {
            google_client_id: Some("client-id.apps.googleusercontent.com".to_string()),
            ..DashboardConfig::default()
        },
        cors_config: CorsConfig::default(),
        rate_limit_config,
    }
}

/// Dashboard router pointed at a fresh mock backend, rate limiting off.
pub async fn setup_test_app() -> (Router, MockServer) {
    let backend = MockServer::start().await;
    let app = init_router(test_state(&backend.uri(), RateLimitConfig::disabled()));
    (app, backend)
}

pub fn cookie_header(access: Option<&str>, refresh: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(access) = access {
        parts.push(format!("access_token={access}"));
    }
    if let Some(refresh) = refresh {
        parts.push(format!("refresh_token={refresh}"));
    }
    parts.join("; ")
}

pub fn get(uri: &str, access: Option<&str>, refresh: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if access.is_some() || refresh.is_some() {
        builder = builder.header(header::COOKIE, cookie_header(access, refresh));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value, cookies: Option<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }
    builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn read_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// All `Set-Cookie` headers of a response.
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect()
}

pub fn set_cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    set_cookies(response).into_iter().find_map(|cookie| {
        let (pair, _) = cookie.split_once(';').unwrap_or((cookie.as_str(), ""));
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.to_string())
    })
}
