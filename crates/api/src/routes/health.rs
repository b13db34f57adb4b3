//! `GET /health`: reachability of the store and readiness of the `todo` schema.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use todo_core::API_VERSION;
use todo_db::SchemaStatus;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` when the store answers and the schema is migrated, else `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    /// The only API tag the RPC routes accept besides the empty one.
    pub api_version: &'static str,
    pub db_healthy: bool,
    pub todo_table: bool,
    pub pending_migrations: usize,
}

impl HealthResponse {
    fn new(db_healthy: bool, schema: Option<SchemaStatus>) -> Self {
        let ready = schema.is_some_and(|s| s.is_ready());
        Self {
            status: if db_healthy && ready { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            api_version: API_VERSION,
            db_healthy,
            todo_table: schema.is_some_and(|s| s.todo_table),
            pending_migrations: schema.map_or(0, |s| s.pending_migrations),
        }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    if let Err(e) = todo_db::health_check(&state.pool).await {
        tracing::warn!(error = %e, "database unreachable");
        return Json(HealthResponse::new(false, None));
    }

    let schema = match todo_db::schema_status(&state.pool).await {
        Ok(schema) => Some(schema),
        Err(e) => {
            tracing::warn!(error = %e, "failed to inspect todo schema");
            None
        }
    };
    Json(HealthResponse::new(true, schema))
}

/// Mounted at the root, outside the versioned RPC tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
