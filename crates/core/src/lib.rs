pub mod error;
pub mod messages;
pub mod timestamp;
pub mod types;

/// The single API revision this service implements.
pub const API_VERSION: &str = "v1";
