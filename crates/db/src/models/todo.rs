//! To-do row model and write DTO.

use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};

/// A row from the `todo` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ToDoRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub reminder: Timestamp,
}

/// The caller-supplied columns, written as a whole on insert and update.
#[derive(Debug, Clone)]
pub struct ToDoFields {
    pub title: String,
    pub description: String,
    pub reminder: Timestamp,
}
