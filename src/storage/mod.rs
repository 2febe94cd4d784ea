//! Storage Layer - SQLite-backed persistence
//!
//! One SQLite file holds any number of stores, one table each:
//! - <store>(key TEXT PRIMARY KEY, value TEXT)

pub mod schema;
pub mod sqlite;

pub use sqlite::{Database, DatabaseOptions};
