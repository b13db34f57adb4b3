//! The to-do service: version check, scoped connection, one statement.
//!
//! Every call is independent. A call acquires its own pooled connection,
//! runs its statement on it and drops it on every exit path, including
//! when the caller cancels the call by dropping its future.

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Sqlite};
use todo_core::error::{ServiceError, ServiceResult};
use todo_core::messages::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, ReadAllRequest,
    ReadAllResponse, ReadRequest, ReadResponse, ToDoItem, UpdateRequest, UpdateResponse,
};
use todo_core::timestamp::{self, WireTimestamp};
use todo_core::types::DbId;
use todo_core::API_VERSION;
use todo_db::models::todo::{ToDoFields, ToDoRow};
use todo_db::repositories::ToDoRepo;
use todo_db::DbPool;

/// The five operations of the to-do API, independent of any transport.
#[async_trait]
pub trait ToDoApi: Send + Sync {
    /// Store a new item and return its assigned id.
    ///
    /// The reminder is checked before a connection is acquired, so an invalid
    /// reminder is `InvalidArgument` even when the pool is unavailable.
    async fn create(&self, req: CreateRequest) -> ServiceResult<CreateResponse>;

    /// Fetch one item by id.
    async fn read(&self, req: ReadRequest) -> ServiceResult<ReadResponse>;

    /// Overwrite every mutable field of an existing item.
    ///
    /// Same ordering as [`ToDoApi::create`]: the reminder is checked before
    /// a connection is acquired.
    async fn update(&self, req: UpdateRequest) -> ServiceResult<UpdateResponse>;

    /// Remove an item by id.
    async fn delete(&self, req: DeleteRequest) -> ServiceResult<DeleteResponse>;

    /// Fetch every item.
    async fn read_all(&self, req: ReadAllRequest) -> ServiceResult<ReadAllResponse>;
}

/// [`ToDoApi`] backed by a SQL connection pool.
///
/// Holds no state besides the pool handle, which the owner must keep open
/// for as long as the service is in use.
#[derive(Clone)]
pub struct ToDoService {
    pool: DbPool,
}

impl ToDoService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// An empty tag accepts whatever version the service implements.
    fn check_api(api: &str) -> ServiceResult<()> {
        if !api.is_empty() && api != API_VERSION {
            return Err(ServiceError::VersionUnsupported {
                requested: api.to_string(),
            });
        }
        Ok(())
    }

    async fn connect(&self) -> ServiceResult<PoolConnection<Sqlite>> {
        self.pool.acquire().await.map_err(ServiceError::connection)
    }
}

/// Split a wire item into its id and the columns to write.
fn to_fields(item: ToDoItem) -> ServiceResult<(DbId, ToDoFields)> {
    let reminder =
        timestamp::to_datetime(item.reminder.as_ref()).map_err(ServiceError::InvalidTimestamp)?;
    Ok((
        item.id,
        ToDoFields {
            title: item.title,
            description: item.description,
            reminder,
        },
    ))
}

fn decode_item(row: &SqliteRow) -> ServiceResult<ToDoItem> {
    let row = ToDoRow::from_row(row).map_err(|e| {
        ServiceError::storage("failed to retrieve field values from todo row", e)
    })?;
    let reminder = WireTimestamp::from_datetime(&row.reminder)
        .map_err(|e| ServiceError::storage("reminder field has invalid format", e))?;
    Ok(ToDoItem {
        id: row.id,
        title: row.title,
        description: row.description,
        reminder: Some(reminder),
    })
}

#[async_trait]
impl ToDoApi for ToDoService {
    #[tracing::instrument(skip(self, req), fields(api = %req.api))]
    async fn create(&self, req: CreateRequest) -> ServiceResult<CreateResponse> {
        Self::check_api(&req.api)?;
        let (_, fields) = to_fields(req.item)?;

        let mut conn = self.connect().await?;
        let row = ToDoRepo::insert(&mut conn, &fields)
            .await
            .map_err(|e| ServiceError::storage("failed to insert into todo", e))?;
        let id = ToDoRepo::returned_id(&row)
            .map_err(|e| ServiceError::storage("failed to retrieve id for created todo", e))?;

        tracing::debug!(id, "todo created");
        Ok(CreateResponse {
            api: API_VERSION.to_string(),
            id,
        })
    }

    #[tracing::instrument(skip(self, req), fields(api = %req.api, id = req.id))]
    async fn read(&self, req: ReadRequest) -> ServiceResult<ReadResponse> {
        Self::check_api(&req.api)?;

        let mut conn = self.connect().await?;
        let mut rows = ToDoRepo::fetch_by_id(&mut conn, req.id);

        let Some(row) = rows
            .try_next()
            .await
            .map_err(|e| ServiceError::storage("failed to select from todo", e))?
        else {
            return Err(ServiceError::NotFound { id: req.id });
        };
        let item = decode_item(&row)?;

        // The schema is not trusted to keep ids unique.
        let extra = rows
            .try_next()
            .await
            .map_err(|e| ServiceError::storage("failed to retrieve data from todo", e))?;
        if extra.is_some() {
            return Err(ServiceError::DuplicateIdentifier { id: req.id });
        }

        Ok(ReadResponse {
            api: API_VERSION.to_string(),
            item,
        })
    }

    #[tracing::instrument(skip(self, req), fields(api = %req.api, id = req.item.id))]
    async fn update(&self, req: UpdateRequest) -> ServiceResult<UpdateResponse> {
        Self::check_api(&req.api)?;
        let (id, fields) = to_fields(req.item)?;

        let mut conn = self.connect().await?;
        let updated = ToDoRepo::update(&mut conn, id, &fields)
            .await
            .map_err(|e| ServiceError::storage("failed to update todo", e))?;
        if updated == 0 {
            return Err(ServiceError::NotFound { id });
        }

        tracing::debug!(updated, "todo updated");
        Ok(UpdateResponse {
            api: API_VERSION.to_string(),
            updated_count: updated,
        })
    }

    #[tracing::instrument(skip(self, req), fields(api = %req.api, id = req.id))]
    async fn delete(&self, req: DeleteRequest) -> ServiceResult<DeleteResponse> {
        Self::check_api(&req.api)?;

        let mut conn = self.connect().await?;
        let deleted = ToDoRepo::delete(&mut conn, req.id)
            .await
            .map_err(|e| ServiceError::storage("failed to delete todo", e))?;
        if deleted == 0 {
            return Err(ServiceError::NotFound { id: req.id });
        }

        tracing::debug!(deleted, "todo deleted");
        Ok(DeleteResponse {
            api: API_VERSION.to_string(),
            deleted_count: deleted,
        })
    }

    #[tracing::instrument(skip(self, req), fields(api = %req.api))]
    async fn read_all(&self, req: ReadAllRequest) -> ServiceResult<ReadAllResponse> {
        Self::check_api(&req.api)?;

        let mut conn = self.connect().await?;
        let mut rows = ToDoRepo::fetch_all(&mut conn);

        // A failure on the first pull is the query itself failing.
        let mut next = rows
            .try_next()
            .await
            .map_err(|e| ServiceError::storage("failed to select from todo", e))?;
        let mut items = Vec::new();
        while let Some(row) = next {
            items.push(decode_item(&row)?);
            next = rows
                .try_next()
                .await
                .map_err(|e| ServiceError::storage("failed to retrieve data from todo", e))?;
        }

        Ok(ReadAllResponse {
            api: API_VERSION.to_string(),
            items,
        })
    }
}
