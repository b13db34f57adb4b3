//! Integration tests for the HTTP adapter: routing, JSON bodies, status
//! codes and the error envelope.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};

const CREATE_BUY_MILK: &str = r#"{
    "api": "v1",
    "item": {
        "title": "Buy milk",
        "description": "2%",
        "reminder": { "seconds": 1704067200, "nanos": 0 }
    }
}"#;

// ---------------------------------------------------------------------------
// Test: health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let (_dir, pool) = common::migrated_pool(2).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["apiVersion"], "v1");
    assert_eq!(json["dbHealthy"], true);
    assert_eq!(json["todoTable"], true);
    assert_eq!(json["pendingMigrations"], 0);
}

#[tokio::test]
async fn health_check_is_degraded_without_schema() {
    let (_dir, pool) = common::empty_pool(2).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["dbHealthy"], true);
    assert_eq!(json["todoTable"], false);
    assert_eq!(json["pendingMigrations"], 1);
}

#[tokio::test]
async fn health_check_is_degraded_when_pool_is_closed() {
    let (_dir, pool) = common::migrated_pool(2).await;
    pool.close().await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["dbHealthy"], false);
    assert_eq!(json["apiVersion"], "v1");
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (_dir, pool) = common::migrated_pool(2).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert!(response.headers().get("x-request-id").is_some());
}

// ---------------------------------------------------------------------------
// Test: RPC routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_read_over_http() {
    let (_dir, pool) = common::migrated_pool(2).await;
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/v1/todo/create", CREATE_BUY_MILK).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["api"], "v1");
    assert_eq!(json["id"], 1);

    let response = post_json(app, "/v1/todo/read", r#"{"api":"v1","id":1}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["item"]["id"], 1);
    assert_eq!(json["item"]["title"], "Buy milk");
    assert_eq!(json["item"]["description"], "2%");
    assert_eq!(json["item"]["reminder"]["seconds"], 1_704_067_200_i64);
    assert_eq!(json["item"]["reminder"]["nanos"], 0);
}

#[tokio::test]
async fn update_and_delete_report_counts() {
    let (_dir, pool) = common::migrated_pool(2).await;
    let app = common::build_test_app(pool);
    post_json(app.clone(), "/v1/todo/create", CREATE_BUY_MILK).await;

    let response = post_json(
        app.clone(),
        "/v1/todo/update",
        r#"{"api":"v1","item":{"id":1,"title":"Buy oat milk","reminder":{"seconds":1704067200}}}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["updatedCount"], 1);

    let response = post_json(app.clone(), "/v1/todo/delete", r#"{"api":"v1","id":1}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deletedCount"], 1);

    let response = post_json(app, "/v1/todo/delete", r#"{"api":"v1","id":1}"#).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn read_all_on_empty_table_has_items_array() {
    let (_dir, pool) = common::migrated_pool(2).await;
    let app = common::build_test_app(pool);

    let response = post_json(app, "/v1/todo/read-all", "{}").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["api"], "v1");
    assert_eq!(json["items"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Test: error envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_item_is_404_not_found() {
    let (_dir, pool) = common::migrated_pool(2).await;
    let app = common::build_test_app(pool);

    let response = post_json(app, "/v1/todo/read", r#"{"api":"v1","id":7}"#).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "todo with ID='7' is not found");
}

#[tokio::test]
async fn unsupported_version_is_501_unimplemented() {
    let (_dir, pool) = common::migrated_pool(2).await;
    let app = common::build_test_app(pool);

    let body = CREATE_BUY_MILK.replace(r#""api": "v1""#, r#""api": "v2""#);
    let response = post_json(app.clone(), "/v1/todo/create", &body).await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body_json(response).await["code"], "UNIMPLEMENTED");

    let response = post_json(app, "/v1/todo/read-all", r#"{"api":"v1"}"#).await;
    assert_eq!(body_json(response).await["items"], serde_json::json!([]));
}

#[tokio::test]
async fn invalid_reminder_is_400_invalid_argument() {
    let (_dir, pool) = common::migrated_pool(2).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/v1/todo/create",
        r#"{"api":"v1","item":{"title":"t","reminder":{"seconds":0,"nanos":1000000000}}}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_ARGUMENT");
    assert_eq!(
        json["error"],
        "reminder field has invalid format-> timestamp: seconds:0 nanos:1000000000: nanos not in range [0, 1e9)"
    );
}

#[tokio::test]
async fn malformed_body_is_400_invalid_argument() {
    let (_dir, pool) = common::migrated_pool(2).await;
    let app = common::build_test_app(pool);

    let response = post_json(app, "/v1/todo/read", r#"{"api":"v1","id":"one"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_ARGUMENT");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("malformed request body-> "));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (_dir, pool) = common::migrated_pool(2).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/v1/todo/archive").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
