//! HTTP-level tests for registration, login and the current profile.

mod common;

use aula_core::messages;
use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, TestApp, SITE_URL, TEST_PASSWORD};
use serde_json::json;

async fn register(test: &TestApp, email: &str, password: &str) -> axum::response::Response {
    post_json(
        test.app(),
        "/api/v1/auth/register",
        json!({ "email": email, "password": password, "full_name": "Ana Pérez" }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Register
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_creates_student_and_signs_in() {
    let test = TestApp::new();
    let response = register(&test, "Ana@Aula.test", TEST_PASSWORD).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let data = &json["data"];
    assert!(data["access_token"].is_string());
    assert_eq!(data["token_type"], "Bearer");
    assert_eq!(data["expires_in"], 15 * 60);
    assert_eq!(data["redirect_url"], format!("{SITE_URL}/courses"));
    assert_eq!(data["user"]["email"], "ana@aula.test");
    assert_eq!(data["user"]["role"], "student");
    assert!(data["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let test = TestApp::new();
    assert_eq!(
        register(&test, "ana@aula.test", TEST_PASSWORD).await.status(),
        StatusCode::CREATED
    );

    let response = register(&test, "ANA@aula.test", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], messages::EMAIL_TAKEN);
}

#[tokio::test]
async fn register_validates_email_and_password() {
    let test = TestApp::new();

    let response = register(&test, "no-es-un-correo", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = register(&test, "   ", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = register(&test, "ana@aula.test", "corta").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn register_accepts_email_with_surrounding_whitespace() {
    let test = TestApp::new();
    let response = register(&test, "  Ana@Aula.test \t", TEST_PASSWORD).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["user"]["email"], "ana@aula.test");

    let response = post_json(
        test.app(),
        "/api/v1/auth/login",
        json!({ "email": " ana@aula.test ", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_with_correct_password_returns_token() {
    let test = TestApp::new();
    let (id, _) = test.user("profe", "teacher").await;

    let response = post_json(
        test.app(),
        "/api/v1/auth/login",
        json!({ "email": "profe@aula.test", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["user"]["id"], id);
    assert_eq!(json["data"]["user"]["role"], "teacher");
    assert_eq!(json["data"]["redirect_url"], format!("{SITE_URL}/dashboard"));

    let token = json["data"]["access_token"].as_str().unwrap();
    let me = get_auth(test.app(), "/api/v1/auth/me", token).await;
    assert_eq!(me.status(), StatusCode::OK);
    assert_eq!(body_json(me).await["data"]["id"], id);
}

#[tokio::test]
async fn login_redirects_each_role_to_its_landing_page() {
    let test = TestApp::new();
    let cases = [
        ("admin", "/admin"),
        ("editor", "/dashboard"),
        ("teacher", "/dashboard"),
        ("student", "/courses"),
    ];

    for (role, path) in cases {
        test.user(role, role).await;
        let response = post_json(
            test.app(),
            "/api/v1/auth/login",
            json!({ "email": format!("{role}@aula.test"), "password": TEST_PASSWORD }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK, "login as {role}");
        let json = body_json(response).await;
        assert_eq!(json["data"]["redirect_url"], format!("{SITE_URL}{path}"), "{role}");
    }
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let test = TestApp::new();
    test.user("profe", "teacher").await;

    let response = post_json(
        test.app(),
        "/api/v1/auth/login",
        json!({ "email": "profe@aula.test", "password": "otra-contraseña" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], messages::INVALID_CREDENTIALS);
}

#[tokio::test]
async fn login_with_unknown_email_is_401() {
    let test = TestApp::new();
    let response = post_json(
        test.app(),
        "/api/v1/auth/login",
        json!({ "email": "nadie@aula.test", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], messages::INVALID_CREDENTIALS);
}

// ---------------------------------------------------------------------------
// Bearer token handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn me_without_token_is_401() {
    let test = TestApp::new();
    let response = get(test.app(), "/api/v1/auth/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], messages::MISSING_AUTH_HEADER);
}

#[tokio::test]
async fn me_with_garbage_token_is_401() {
    let test = TestApp::new();
    let response = get_auth(test.app(), "/api/v1/auth/me", "no.es.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], messages::INVALID_TOKEN);
}

#[tokio::test]
async fn token_for_deleted_profile_is_401() {
    let test = TestApp::new();
    let token = aula_api::auth::jwt::generate_access_token(4242, "admin", &test.config.jwt).unwrap();

    let response = get_auth(test.app(), "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], messages::NOT_AUTHENTICATED);
}
