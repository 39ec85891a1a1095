#![allow(dead_code)]

use std::sync::Arc;

use aula_api::auth::jwt::{generate_access_token, JwtConfig};
use aula_api::auth::password::hash_password;
use aula_api::config::ServerConfig;
use aula_api::router::build_app_router;
use aula_api::state::AppState;
use aula_core::types::DbId;
use aula_db::models::profile::CreateProfile;
use aula_db::store::ProfileStore;
use aula_db::MemoryContentStore;
use aula_storage::MemoryObjectStorage;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "contraseña-segura";
pub const SITE_URL: &str = "http://localhost:5173";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![SITE_URL.to_string()],
        request_timeout_secs: 30,
        site_url: SITE_URL.to_string(),
        max_upload_bytes: 1024 * 1024,
        jwt: JwtConfig {
            secret: "secreto-de-pruebas-suficientemente-largo".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// The router over in-memory stores, plus handles to those stores for
/// seeding and assertions.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryContentStore>,
    pub storage: Arc<MemoryObjectStorage>,
    pub config: ServerConfig,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryContentStore::new());
        let storage = Arc::new(MemoryObjectStorage::new());
        let config = test_config();
        let state = AppState {
            store: store.clone(),
            storage: storage.clone(),
            config: Arc::new(config.clone()),
        };
        Self {
            router: build_app_router(state),
            store,
            storage,
            config,
        }
    }

    /// A fresh handle on the router; `oneshot` consumes it.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Insert a profile with [`TEST_PASSWORD`] and return its id and a token.
    pub async fn user(&self, name: &str, role: &str) -> (DbId, String) {
        let profile = self
            .store
            .create_profile(&CreateProfile {
                email: format!("{name}@aula.test"),
                full_name: name.to_string(),
                role: role.to_string(),
                password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
            })
            .await
            .expect("profile creation should succeed");
        let token = generate_access_token(profile.id, role, &self.config.jwt)
            .expect("token generation should succeed");
        (profile.id, token)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");
    app.oneshot(request).await.expect("router is infallible")
}

/// Send an authenticated request with an arbitrary body and content type.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    token: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .expect("request should build");
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Build a `multipart/form-data` body from text fields and one optional file.
pub fn multipart_body(
    boundary: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, content_type, content)) = file {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(
    app: Router,
    uri: &str,
    token: &str,
    boundary: &str,
    body: Vec<u8>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .expect("request should build");
    app.oneshot(request).await.expect("router is infallible")
}
