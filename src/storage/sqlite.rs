//! SQLite database handle

use std::path::{Path, PathBuf};
use std::time::Duration;
use rusqlite::Connection;
use crate::config::ensure_db_dir;
use crate::store::Store;
use crate::{Error, Result};
use super::schema;

/// Connection settings applied when opening a database
#[derive(Debug, Clone, Default)]
pub struct DatabaseOptions {
    /// How long to wait on a locked database before failing, in milliseconds
    pub busy_timeout_ms: Option<u64>,
}

/// Owner of one connection to a SQLite file; a factory for stores.
///
/// The handle keeps no per-store state. Stores borrow it, so any number of
/// them can share the connection within a thread.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with(path, &DatabaseOptions::default())
    }

    /// Open a database file with explicit connection options
    pub fn open_with(path: &Path, options: &DatabaseOptions) -> Result<Self> {
        ensure_db_dir(path)?;

        let open_err = |source| Error::Open {
            path: path.to_path_buf(),
            source,
        };

        let conn = Connection::open(path).map_err(open_err)?;
        // Reading the header now makes a non-database file fail here, not on first use
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(open_err)?;

        if let Some(ms) = options.busy_timeout_ms {
            conn.busy_timeout(Duration::from_millis(ms)).map_err(open_err)?;
        }

        tracing::info!(path = %path.display(), "opened database");
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn, path: None })
    }

    /// Get a store by name, creating its table if needed.
    ///
    /// Each call returns a new, independent `Store` with an empty cache, even
    /// for a name already in use. Caches are not shared between instances.
    pub fn store(&self, name: &str) -> Result<Store<'_>> {
        let statements = schema::StoreStatements::new(name)?;
        self.conn.execute(&statements.create_table, [])?;
        tracing::info!(store = name, "store ready");
        Ok(Store::new(&self.conn, name, statements))
    }

    /// Names of every store in the database, sorted
    pub fn store_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(schema::LIST_STORES)?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    /// File backing this handle, `None` for in-memory databases
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The shared connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
