//! To-do API server library.
//!
//! Exposes the service, its HTTP adapter and the configuration so both the
//! binary entrypoint and the integration tests can build the same app.

pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod service;
pub mod state;
