//! Repository layer: raw SQL for each table.
//!
//! Repositories take a single borrowed connection so the caller decides
//! how long it is held and when it goes back to the pool.

pub mod todo_repo;

pub use todo_repo::ToDoRepo;
