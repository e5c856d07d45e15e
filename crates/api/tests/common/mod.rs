#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use pixelbox_api::app::build_app;
use pixelbox_api::config::ServerConfig;
use pixelbox_api::state::AppState;

/// The application as served: router wrapped in path normalization.
pub type TestApp = NormalizePath<Router>;

pub const TEST_BASE_URL: &str = "http://testserver";

/// Build a test `ServerConfig` with safe defaults.
///
/// Each call gets its own media directory under the system temp dir.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        cache_ttl_secs: 300,
        public_base_url: TEST_BASE_URL.to_string(),
        media_root: std::env::temp_dir().join(format!("pixelbox-test-{}", uuid::Uuid::new_v4())),
        max_upload_bytes: 1024 * 1024,
    }
}

/// Build the full application with all middleware layers, using the given
/// database pool. Goes through the same `build_app` as the server binary.
pub fn build_test_app(pool: PgPool) -> TestApp {
    build_app(AppState::new(pool, test_config()))
}

/// Like [`build_test_app`] with a specific cache TTL (0 disables caching).
pub fn build_test_app_with_ttl(pool: PgPool, cache_ttl_secs: u64) -> TestApp {
    let config = ServerConfig {
        cache_ttl_secs,
        ..test_config()
    };
    build_app(AppState::new(pool, config))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: TestApp, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: TestApp, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: TestApp, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: TestApp, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: TestApp, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn patch(app: TestApp, uri: &str) -> Response {
    send(app, Method::PATCH, uri, None).await
}

pub async fn delete(app: TestApp, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
