//! RPC-style routes for the to-do service.
//!
//! Each route takes the operation's request message as a JSON body and
//! answers with its response message. Failures use the [`AppError`] body.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use todo_core::messages::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, ReadAllRequest,
    ReadAllResponse, ReadRequest, ReadResponse, UpdateRequest, UpdateResponse,
};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /v1/todo/create
async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> AppResult<Json<CreateResponse>> {
    let Json(req) = payload?;
    Ok(Json(state.todos.create(req).await?))
}

/// POST /v1/todo/read
async fn read(
    State(state): State<AppState>,
    payload: Result<Json<ReadRequest>, JsonRejection>,
) -> AppResult<Json<ReadResponse>> {
    let Json(req) = payload?;
    Ok(Json(state.todos.read(req).await?))
}

/// POST /v1/todo/update
async fn update(
    State(state): State<AppState>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> AppResult<Json<UpdateResponse>> {
    let Json(req) = payload?;
    Ok(Json(state.todos.update(req).await?))
}

/// POST /v1/todo/delete
async fn delete(
    State(state): State<AppState>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> AppResult<Json<DeleteResponse>> {
    let Json(req) = payload?;
    Ok(Json(state.todos.delete(req).await?))
}

/// POST /v1/todo/read-all
async fn read_all(
    State(state): State<AppState>,
    payload: Result<Json<ReadAllRequest>, JsonRejection>,
) -> AppResult<Json<ReadAllResponse>> {
    let Json(req) = payload?;
    Ok(Json(state.todos.read_all(req).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create))
        .route("/read", post(read))
        .route("/update", post(update))
        .route("/delete", post(delete))
        .route("/read-all", post(read_all))
}
