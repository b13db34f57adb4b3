//! Request and response messages of the to-do service.
//!
//! Every request carries an `api` version tag (empty means "any version")
//! and every response echoes the version the service implements.

use serde::{Deserialize, Serialize};

use crate::timestamp::WireTimestamp;
use crate::types::DbId;

/// A to-do item as exchanged with callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDoItem {
    /// Ignored on create; the store assigns it.
    #[serde(default)]
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reminder: Option<WireTimestamp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    #[serde(default)]
    pub api: String,
    pub item: ToDoItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    pub api: String,
    pub id: DbId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadRequest {
    #[serde(default)]
    pub api: String,
    pub id: DbId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadResponse {
    pub api: String,
    pub item: ToDoItem,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[serde(default)]
    pub api: String,
    pub item: ToDoItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub api: String,
    pub updated_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    #[serde(default)]
    pub api: String,
    pub id: DbId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub api: String,
    pub deleted_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadAllRequest {
    #[serde(default)]
    pub api: String,
}

/// `items` is always present, `[]` when the table is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadAllResponse {
    pub api: String,
    pub items: Vec<ToDoItem>,
}
