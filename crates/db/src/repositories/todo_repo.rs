//! Repository for the `todo` table.
//!
//! Reads hand back raw rows as a stream so the caller can tell query,
//! iteration and decode failures apart and can stop at the first bad row.

use futures::stream::BoxStream;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};
use todo_core::types::DbId;

use crate::models::todo::ToDoFields;

const INSERT: &str = "INSERT INTO todo (title, description, reminder) VALUES (?, ?, ?) RETURNING id";

const SELECT_BY_ID: &str = "SELECT id, title, description, reminder FROM todo WHERE id = ?";

const SELECT_ALL: &str = "SELECT id, title, description, reminder FROM todo";

const UPDATE: &str = "UPDATE todo SET title = ?, description = ?, reminder = ? WHERE id = ?";

const DELETE: &str = "DELETE FROM todo WHERE id = ?";

/// Provides CRUD statements for to-do items.
pub struct ToDoRepo;

impl ToDoRepo {
    /// Insert a new row, returning the row produced by `RETURNING id`.
    ///
    /// Use [`ToDoRepo::returned_id`] to read the assigned id from it.
    pub async fn insert(
        conn: &mut SqliteConnection,
        input: &ToDoFields,
    ) -> Result<SqliteRow, sqlx::Error> {
        sqlx::query(INSERT)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.reminder)
            .fetch_one(conn)
            .await
    }

    /// Read the store-assigned id out of an [`ToDoRepo::insert`] result.
    pub fn returned_id(row: &SqliteRow) -> Result<DbId, sqlx::Error> {
        row.try_get("id")
    }

    /// Stream every row whose id matches. More than one is an integrity
    /// violation the caller is expected to detect.
    pub fn fetch_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> BoxStream<'_, Result<SqliteRow, sqlx::Error>> {
        sqlx::query(SELECT_BY_ID).bind(id).fetch(conn)
    }

    /// Stream all rows in the table's natural order.
    pub fn fetch_all(conn: &mut SqliteConnection) -> BoxStream<'_, Result<SqliteRow, sqlx::Error>> {
        sqlx::query(SELECT_ALL).fetch(conn)
    }

    /// Overwrite every mutable column of the row with `id`.
    ///
    /// Returns the number of rows affected; `0` means no such id.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &ToDoFields,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(UPDATE)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.reminder)
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Hard-delete the row with `id`. Returns the number of rows removed.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(DELETE).bind(id).execute(conn).await?;
        Ok(result.rows_affected())
    }
}
