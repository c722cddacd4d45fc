//! Storage layer
//!
//! SQLite schema management and storage error types. The `Store` in
//! `crate::store` is the only code that issues queries.

pub mod error;
pub mod schema;

pub use error::StorageError;
pub use schema::{get_schema_version, init_schema, SCHEMA_VERSION};
