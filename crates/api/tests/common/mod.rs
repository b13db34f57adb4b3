#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use todo_api::config::ServerConfig;
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_db::DbPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 4,
        db_acquire_timeout_secs: 5,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
    }
}

/// A pool over a fresh SQLite file without any schema.
///
/// The directory must outlive the pool, so both are returned.
pub async fn empty_pool(max_connections: u32) -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("todo.db").display());
    let pool = todo_db::create_pool(&url, max_connections, Duration::from_secs(2))
        .await
        .unwrap();
    (dir, pool)
}

/// A pool over a fresh, migrated SQLite file.
pub async fn migrated_pool(max_connections: u32) -> (TempDir, DbPool) {
    let (dir, pool) = empty_pool(max_connections).await;
    todo_db::run_migrations(&pool).await.unwrap();
    (dir, pool)
}

/// Build the full application router over the given pool, exactly as the
/// binary does.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState::new(pool), &test_config())
}

/// Send a POST with a raw JSON body.
pub async fn post_json(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET with an empty body.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
