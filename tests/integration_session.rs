mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_health_is_public() {
    let (app, _backend) = setup_test_app().await;

    let response = app.oneshot(get("/health", None, None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_no_tokens_redirects_to_login() {
    let (app, _backend) = setup_test_app().await;

    let response = app.oneshot(get("/api/semesters", None, None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_expired_access_redirects_to_refresh_with_next() {
    let (app, _backend) = setup_test_app().await;
    let access = expired_access();
    let refresh = valid_refresh();

    let response = app
        .oneshot(get(
            "/api/assignments/4/alerts?threshold=70",
            Some(&access),
            Some(&refresh),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/refresh?next=%2Fapi%2Fassignments%2F4%2Falerts%3Fthreshold%3D70"
    );
}

#[tokio::test]
async fn test_missing_access_with_refresh_redirects_to_refresh() {
    let (app, _backend) = setup_test_app().await;
    let refresh = valid_refresh();

    let response = app.oneshot(get("/", None, Some(&refresh))).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/refresh?next=%2F");
}

#[tokio::test]
async fn test_both_expired_redirects_to_logout() {
    let (app, _backend) = setup_test_app().await;
    let access = expired_access();
    let refresh = expired_refresh();

    let response = app
        .oneshot(get("/api/semesters", Some(&access), Some(&refresh)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/logout");
}

#[tokio::test]
async fn test_valid_session_reaches_handler() {
    let (app, _backend) = setup_test_app().await;
    let access = valid_access();

    let response = app.oneshot(get("/api/me", Some(&access), None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["user_id"], USER_ID);
    assert_eq!(body["professor_id"], PROFESSOR_ID);
}

#[tokio::test]
async fn test_access_without_user_id_redirects_to_logout() {
    let (app, _backend) = setup_test_app().await;
    let access = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &json!({"exp": chrono::Utc::now().timestamp() + 300}),
        &jsonwebtoken::EncodingKey::from_secret(b"k"),
    )
    .unwrap();

    let response = app.oneshot(get("/api/me", Some(&access), None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/logout");
}

#[tokio::test]
async fn test_login_page_redirects_home_when_signed_in() {
    let (app, _backend) = setup_test_app().await;
    let access = valid_access();

    let response = app.oneshot(get("/login", Some(&access), None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_login_page_shows_client_id_when_signed_out() {
    let (app, _backend) = setup_test_app().await;

    let response = app.oneshot(get("/login", None, None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["google_client_id"], "client-id.apps.googleusercontent.com");
    assert_eq!(body["session"], "no_tokens");
}

#[tokio::test]
async fn test_login_sets_session_cookies() {
    let (app, backend) = setup_test_app().await;
    let access = valid_access();
    let refresh = valid_refresh();

    Mock::given(method("POST"))
        .and(path("/api/google/verify"))
        .and(body_json(json!({"id_token": "google-id-token"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": access,
            "refresh": refresh,
            "user": {
                "pk": USER_ID,
                "email": "prof@example.edu",
                "first_name": "Ada",
                "last_name": "Lovelace"
            }
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let response = app
        .oneshot(post_json(
            "/login",
            &json!({"id_token": "google-id-token"}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(set_cookie_value(&response, "access_token"), Some(access));
    assert_eq!(set_cookie_value(&response, "refresh_token"), Some(refresh));
    assert!(
        set_cookies(&response)
            .iter()
            .all(|c| c.contains("HttpOnly") && c.contains("SameSite=Lax"))
    );

    let body = read_json(response).await;
    assert_eq!(body["user"]["email"], "prof@example.edu");
    assert_eq!(body["redirect"], "/");
}

#[tokio::test]
async fn test_login_rejects_empty_id_token() {
    let (app, _backend) = setup_test_app().await;

    let response = app
        .oneshot(post_json("/login", &json!({"id_token": ""}), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_passes_backend_rejection_through() {
    let (app, backend) = setup_test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/google/verify"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Invalid Google token"})),
        )
        .mount(&backend)
        .await;

    let response = app
        .oneshot(post_json("/login", &json!({"id_token": "bad"}), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(set_cookies(&response).is_empty());
    let body = read_json(response).await;
    assert_eq!(body["detail"], "Invalid Google token");
}

#[tokio::test]
async fn test_refresh_sets_access_cookie_and_returns_to_next() {
    let (app, backend) = setup_test_app().await;
    let refresh = valid_refresh();
    let new_access = valid_access();

    Mock::given(method("POST"))
        .and(path("/api/token/refresh"))
        .and(body_json(json!({"refresh": refresh})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": new_access})))
        .expect(1)
        .mount(&backend)
        .await;

    let response = app
        .oneshot(get(
            "/refresh?next=%2Fapi%2Fsemesters",
            Some(&expired_access()),
            Some(&refresh),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/semesters");
    assert_eq!(set_cookie_value(&response, "access_token"), Some(new_access));
    assert_eq!(set_cookie_value(&response, "refresh_token"), None);
}

#[tokio::test]
async fn test_refresh_ignores_offsite_next() {
    let (app, backend) = setup_test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/token/refresh"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access": valid_access()})),
        )
        .mount(&backend)
        .await;

    let response = app
        .oneshot(get(
            "/refresh?next=%2F%2Fevil.example",
            None,
            Some(&valid_refresh()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_refresh_without_cookie_redirects_to_login() {
    let (app, _backend) = setup_test_app().await;

    let response = app.oneshot(get("/refresh", None, None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_refresh_with_expired_cookie_redirects_to_logout() {
    let (app, backend) = setup_test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/token/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend)
        .await;

    let response = app
        .oneshot(get("/refresh", None, Some(&expired_refresh())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/logout");
}

#[tokio::test]
async fn test_refresh_rejected_by_backend_redirects_to_logout() {
    let (app, backend) = setup_test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/token/refresh"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Token is blacklisted"})),
        )
        .mount(&backend)
        .await;

    let response = app
        .oneshot(get("/refresh", None, Some(&valid_refresh())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/logout");
}

#[tokio::test]
async fn test_logout_clears_cookies_and_notifies_backend() {
    let (app, backend) = setup_test_app().await;
    let refresh = valid_refresh();

    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .and(body_json(json!({"refresh": refresh})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "Successfully logged out."})))
        .expect(1)
        .mount(&backend)
        .await;

    let response = app
        .oneshot(get("/logout", Some(&valid_access()), Some(&refresh)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert_eq!(set_cookie_value(&response, "access_token").as_deref(), Some(""));
    assert_eq!(set_cookie_value(&response, "refresh_token").as_deref(), Some(""));
}

#[tokio::test]
async fn test_logout_succeeds_when_backend_fails() {
    let (app, backend) = setup_test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend)
        .await;

    let response = app
        .oneshot(get("/logout", None, Some(&expired_refresh())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_backend_refresh_during_request_sets_new_cookies() {
    let (app, backend) = setup_test_app().await;
    let stale = valid_access();
    let refresh = valid_refresh();
    let fresh = mint_token("access", 600);

    Mock::given(method("GET"))
        .and(path("/api/course/semester/get-semesters/"))
        .and(header("authorization", format!("Bearer {stale}").as_str()))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Token is invalid or expired"})))
        .mount(&backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/token/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": fresh})))
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/course/semester/get-semesters/"))
        .and(query_param("uid", USER_ID.to_string().as_str()))
        .and(header("authorization", format!("Bearer {fresh}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Fall 2024", "year": 2024, "term": "Fall"}
        ])))
        .mount(&backend)
        .await;

    let response = app
        .oneshot(get("/api/semesters", Some(&stale), Some(&refresh)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(set_cookie_value(&response, "access_token"), Some(fresh));
    let body = read_json(response).await;
    assert_eq!(body[0]["name"], "Fall 2024");
}

#[tokio::test]
async fn test_backend_unauthorized_after_retry_redirects_to_logout() {
    let (app, backend) = setup_test_app().await;

    Mock::given(method("GET"))
        .and(path("/api/course/semester/get-semesters/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Token is invalid or expired"})))
        .mount(&backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/token/refresh"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access": valid_access()})),
        )
        .mount(&backend)
        .await;

    let response = app
        .oneshot(get(
            "/api/semesters",
            Some(&valid_access()),
            Some(&valid_refresh()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/logout");
}
