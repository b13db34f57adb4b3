use std::time::Duration;

use tempfile::TempDir;
use todo_db::DbPool;

/// Open a SQLite database without any schema in a fresh temporary directory.
///
/// The directory must outlive the pool, so both are returned.
pub async fn empty_pool() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("todo.db").display());
    let pool = todo_db::create_pool(&url, 4, Duration::from_secs(5))
        .await
        .unwrap();
    (dir, pool)
}

/// Create a migrated SQLite database in a fresh temporary directory.
pub async fn migrated_pool() -> (TempDir, DbPool) {
    let (dir, pool) = empty_pool().await;
    todo_db::run_migrations(&pool).await.unwrap();
    (dir, pool)
}
