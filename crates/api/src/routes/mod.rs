pub mod health;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the versioned RPC route tree.
///
/// Route hierarchy:
///
/// ```text
/// /v1/todo/create     POST
/// /v1/todo/read       POST
/// /v1/todo/update     POST
/// /v1/todo/delete     POST
/// /v1/todo/read-all   POST
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/todo", todo::router())
}
