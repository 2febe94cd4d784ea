//! Table layout and statement text for stores
//!
//! Every store is one table:
//! `CREATE TABLE IF NOT EXISTS "<name>" ("key" TEXT PRIMARY KEY, "value" TEXT)`
//!
//! Store names are interpolated into SQL, so they are validated here before
//! any statement is built.

use crate::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Key column name
pub const KEY_COLUMN: &str = "key";

/// Value column name
pub const VALUE_COLUMN: &str = "value";

/// Longest accepted store name, in bytes
pub const MAX_STORE_NAME_LEN: usize = 64;

/// Lists user tables, i.e. every store in the file
pub const LIST_STORES: &str =
    "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\' ORDER BY name";

static STORE_NAME: OnceLock<Regex> = OnceLock::new();

fn store_name_pattern() -> &'static Regex {
    STORE_NAME.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("store name pattern is valid")
    })
}

/// Check that a store name is safe to use as a table identifier
pub fn validate_store_name(name: &str) -> Result<()> {
    if name.len() > MAX_STORE_NAME_LEN {
        return Err(Error::InvalidStoreName(name.to_string()));
    }
    if !store_name_pattern().is_match(name) {
        return Err(Error::InvalidStoreName(name.to_string()));
    }
    // sqlite_* names belong to the engine
    if name.to_ascii_lowercase().starts_with("sqlite_") {
        return Err(Error::InvalidStoreName(name.to_string()));
    }
    Ok(())
}

/// Double-quote an identifier
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Pre-rendered SQL for one store's table.
///
/// Built once per store from a validated name; every statement binds keys
/// and values as positional parameters.
#[derive(Debug, Clone)]
pub struct StoreStatements {
    pub create_table: String,
    pub select_one: String,
    pub select_all: String,
    pub upsert: String,
    pub delete_one: String,
    pub delete_all: String,
    pub count: String,
    pub cursor_first: String,
    pub cursor_next: String,
}

impl StoreStatements {
    pub fn new(name: &str) -> Result<Self> {
        validate_store_name(name)?;

        let table = quote_ident(name);
        let key = quote_ident(KEY_COLUMN);
        let value = quote_ident(VALUE_COLUMN);

        Ok(Self {
            create_table: format!(
                "CREATE TABLE IF NOT EXISTS {table} ({key} TEXT PRIMARY KEY, {value} TEXT)"
            ),
            select_one: format!("SELECT {key}, {value} FROM {table} WHERE {key} = ?1"),
            select_all: format!("SELECT {key}, {value} FROM {table}"),
            upsert: format!(
                "INSERT INTO {table} ({key}, {value}) VALUES (?1, ?2) \
                 ON CONFLICT({key}) DO UPDATE SET {value} = excluded.{value}"
            ),
            delete_one: format!("DELETE FROM {table} WHERE {key} = ?1"),
            delete_all: format!("DELETE FROM {table}"),
            count: format!("SELECT COUNT(*) FROM {table}"),
            cursor_first: format!(
                "SELECT rowid, {key}, {value} FROM {table} ORDER BY rowid LIMIT 1"
            ),
            cursor_next: format!(
                "SELECT rowid, {key}, {value} FROM {table} WHERE rowid > ?1 ORDER BY rowid LIMIT 1"
            ),
        })
    }
}
