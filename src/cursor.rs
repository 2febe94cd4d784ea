//! Sequential full-table cursor
//!
//! A cursor walks a store's table in `rowid` order, one row per step:
//!
//! ```text
//! Unstarted --rewind--> Iterating --next--> ... --next--> Exhausted
//!     \______________________rewind (empty table)_______/
//! ```
//!
//! It is keyed on the last `rowid` seen rather than on a live statement, so
//! it borrows nothing between calls. It never touches a store's cache.

use rusqlite::{Connection, OptionalExtension, Params};
use crate::storage::schema::StoreStatements;
use crate::Result;

/// Position of a cursor in its scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Unstarted,
    Iterating,
    Exhausted,
}

/// Row under the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
struct CursorRow {
    rowid: i64,
    key: String,
    value: Option<String>,
}

#[derive(Debug)]
pub struct Cursor {
    state: CursorState,
    row: Option<CursorRow>,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            state: CursorState::Unstarted,
            row: None,
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Restart the scan at the lowest rowid, whatever its sign
    pub fn rewind(&mut self, conn: &Connection, statements: &StoreStatements) -> Result<()> {
        self.fetch(conn, &statements.cursor_first, [])
    }

    /// Step to the following row
    pub fn next(&mut self, conn: &Connection, statements: &StoreStatements) -> Result<()> {
        match (self.state, self.row.as_ref().map(|r| r.rowid)) {
            (CursorState::Unstarted, _) | (CursorState::Iterating, None) => {
                self.rewind(conn, statements)
            }
            (CursorState::Iterating, Some(after)) => {
                self.fetch(conn, &statements.cursor_next, [after])
            }
            (CursorState::Exhausted, _) => Ok(()),
        }
    }

    pub fn valid(&self) -> bool {
        self.state == CursorState::Iterating
    }

    pub fn key(&self) -> Option<&str> {
        self.row.as_ref().map(|r| r.key.as_str())
    }

    pub fn current(&self) -> Option<&str> {
        self.row.as_ref().and_then(|r| r.value.as_deref())
    }

    fn fetch(&mut self, conn: &Connection, sql: &str, params: impl Params) -> Result<()> {
        let row = conn
            .query_row(sql, params, |row| {
                Ok(CursorRow {
                    rowid: row.get(0)?,
                    key: row.get(1)?,
                    value: row.get(2)?,
                })
            })
            .optional()?;

        self.state = if row.is_some() {
            CursorState::Iterating
        } else {
            CursorState::Exhausted
        };
        self.row = row;
        Ok(())
    }
}
