#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use quillboard_api::auth::jwt::AuthConfig;
use quillboard_api::config::ServerConfig;
use quillboard_api::router::build_app_router;
use quillboard_api::state::AppState;
use quillboard_core::assets::LocalAssetStore;
use quillboard_events::EventBus;
use sqlx::PgPool;
use tower::ServiceExt;

pub const ALICE: &str = "user_alice";
pub const BOB: &str = "user_bob";

/// Build a test `ServerConfig` with safe defaults.
///
/// Auth runs in development mode (no secret), so requests identify
/// themselves with the `x-user-id` header.
pub fn test_config(asset_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: AuthConfig::default(),
        asset_dir: asset_dir.to_path_buf(),
        max_upload_bytes: 1024 * 1024,
        backup_webhook_url: None,
        backup_debounce_ms: 5000,
    }
}

/// A fresh asset directory under the system temp dir.
pub fn temp_asset_dir() -> PathBuf {
    std::env::temp_dir().join(format!("quillboard-test-{}", uuid::Uuid::new_v4()))
}

/// Build the full application router (same middleware stack as `main.rs`)
/// with a throwaway asset directory.
pub fn build_test_app(pool: PgPool) -> Router {
    let asset_dir = temp_asset_dir();
    build_test_app_with_config(pool, test_config(&asset_dir))
}

/// Build the application router from an explicit config.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    build_test_app_with_bus(pool, config, Arc::new(EventBus::default()))
}

/// Build the application router publishing onto `event_bus`.
pub fn build_test_app_with_bus(
    pool: PgPool,
    config: ServerConfig,
    event_bus: Arc<EventBus>,
) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus,
        assets: Arc::new(LocalAssetStore::new(config.asset_dir.clone())),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

fn json_request(method: &str, uri: &str, user: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", user)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: &Router, uri: &str, user: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("x-user-id", user)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str, user: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("x-user-id", user)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_empty(app: &Router, uri: &str, user: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("x-user-id", user)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    user: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request("POST", uri, user, body)).await
}

pub async fn patch_json(
    app: &Router,
    uri: &str,
    user: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request("PATCH", uri, user, body)).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    user: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request("PUT", uri, user, body)).await
}

/// POST a single-file multipart body under the `file` field.
pub async fn post_file(
    app: &Router,
    uri: &str,
    user: &str,
    filename: &str,
    mime_type: &str,
    bytes: &[u8],
) -> Response<Body> {
    const BOUNDARY: &str = "quillboard-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: {mime_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("x-user-id", user)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a resource and return its id as a string.
pub async fn create(app: &Router, uri: &str, user: &str, body: serde_json::Value) -> String {
    let response = post_json(app, uri, user, body).await;
    assert_eq!(response.status(), 201, "create at {uri} should succeed");
    body_json(response).await["id"]
        .as_str()
        .expect("created id")
        .to_string()
}

pub async fn create_book(app: &Router, user: &str, title: &str) -> String {
    create(app, "/api/books", user, serde_json::json!({ "title": title })).await
}
