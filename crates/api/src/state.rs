use std::sync::Arc;

use crate::service::ToDoApi;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: todo_db::DbPool,
    /// The to-do operations the RPC routes dispatch to.
    pub todos: Arc<dyn ToDoApi>,
}

impl AppState {
    /// State serving the pool-backed [`crate::service::ToDoService`].
    pub fn new(pool: todo_db::DbPool) -> Self {
        let todos = Arc::new(crate::service::ToDoService::new(pool.clone()));
        Self { pool, todos }
    }
}
