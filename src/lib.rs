//! # nosqlite - key-value stores over SQLite
//!
//! Every named store is a two-column SQLite table `(key, value)`.
//!
//! nosqlite provides:
//! - A `Database` handle that opens the file and manufactures stores
//! - `Store`: get/set/delete/increment/count with a read-through cache
//! - Typed accessors over a canonical text encoding (`Value`)
//! - An explicit sequential cursor for full-table iteration
//!
//! ```no_run
//! use nosqlite::Database;
//!
//! # fn main() -> nosqlite::Result<()> {
//! let db = Database::open("app.db".as_ref())?;
//! let mut settings = db.store("settings")?;
//! settings.set("theme", "dark")?;
//! settings.set_int("retries", 3)?;
//! assert_eq!(settings.get_int("retries")?, Some(3));
//! # Ok(())
//! # }
//! ```

pub mod value;
pub mod storage;
pub mod store;
pub mod cursor;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use value::{Value, ValueKind};
pub use storage::{Database, DatabaseOptions};
pub use store::{CacheState, Store};
pub use cursor::{Cursor, CursorState};

use std::path::PathBuf;

/// Result type alias for nosqlite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for nosqlite operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Type error: {0}")]
    TypeArgument(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Could not parse date: {0:?}")]
    DateParse(String),

    #[error("Invalid store name: {0:?}")]
    InvalidStoreName(String),

    #[error("Incrementing {key:?} by {amount} overflows a 64-bit integer")]
    Overflow { key: String, amount: i64 },

    #[error("Cannot open database {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
