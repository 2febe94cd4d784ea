//! Named key-value store over one SQLite table
//!
//! A `Store` mirrors rows into an in-process cache:
//! - reads go to the cache first, then to a point `SELECT`
//! - writes go to the table first, then to the cache
//! - `get_all` scans the whole table once and marks the cache complete
//!
//! Once complete, a cache miss is trusted as "no such key" and the table is
//! not consulted. Caches belong to one `Store` instance; two instances over
//! the same table do not see each other's cached reads.

use std::collections::HashMap;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use crate::cursor::{Cursor, CursorState};
use crate::storage::schema::StoreStatements;
use crate::value::{self, Value, ValueKind};
use crate::{Error, Result};

/// How much of the table the cache is known to hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Only rows read or written through this store
    Partial,
    /// Every row, after a full-table scan
    Complete,
}

pub struct Store<'db> {
    conn: &'db Connection,
    name: String,
    statements: StoreStatements,
    cache: HashMap<String, String>,
    state: CacheState,
    cursor: Cursor,
}

impl<'db> Store<'db> {
    /// Bind a store to its table. The table must already exist;
    /// use [`crate::Database::store`].
    pub(crate) fn new(conn: &'db Connection, name: &str, statements: StoreStatements) -> Self {
        Self {
            conn,
            name: name.to_string(),
            statements,
            cache: HashMap::new(),
            state: CacheState::Partial,
            cursor: Cursor::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cache_state(&self) -> CacheState {
        self.state
    }

    /// True once `get_all` has loaded every row
    pub fn is_loaded(&self) -> bool {
        self.state == CacheState::Complete
    }

    /// Number of keys currently cached
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    // ========== Reads ==========

    /// Get the value stored under `key`
    pub fn get(&mut self, key: &str) -> Result<Option<String>> {
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }
        if self.state == CacheState::Complete {
            return Ok(None);
        }

        tracing::debug!(store = %self.name, key, "point lookup");
        let found: Option<Option<String>> = self
            .conn
            .query_row(&self.statements.select_one, [key], |row| row.get(1))
            .optional()?;

        // A NULL value column reads as a missing key
        match found.flatten() {
            Some(value) => {
                self.cache.insert(key.to_string(), value.clone());
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Get every key and value, scanning the table on first use
    pub fn get_all(&mut self) -> Result<&HashMap<String, String>> {
        if self.state == CacheState::Partial {
            tracing::debug!(store = %self.name, "full scan");
            let mut stmt = self.conn.prepare(&self.statements.select_all)?;
            let rows = stmt.query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
            })?;

            let mut scanned = Vec::new();
            for row in rows {
                if let (key, Some(value)) = row? {
                    scanned.push((key, value));
                }
            }

            self.cache.extend(scanned);
            self.state = CacheState::Complete;
        }

        Ok(&self.cache)
    }

    pub fn get_string(&mut self, key: &str) -> Result<Option<String>> {
        self.get(key)
    }

    pub fn get_int(&mut self, key: &str) -> Result<Option<i64>> {
        self.get_typed(key, ValueKind::Integer, value::decode_int)
    }

    pub fn get_float(&mut self, key: &str) -> Result<Option<f64>> {
        self.get_typed(key, ValueKind::Float, value::decode_float)
    }

    pub fn get_double(&mut self, key: &str) -> Result<Option<f64>> {
        self.get_float(key)
    }

    /// Truthiness of the stored text; a missing key is `false`
    pub fn get_boolean(&mut self, key: &str) -> Result<bool> {
        let text = self.get(key)?;
        Ok(value::decode_bool(text.as_deref()))
    }

    pub fn get_date(&mut self, key: &str) -> Result<Option<NaiveDateTime>> {
        self.get_typed(key, ValueKind::Date, value::decode_date)
    }

    fn get_typed<T>(
        &mut self,
        key: &str,
        kind: ValueKind,
        decode: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        let Some(text) = self.get(key)? else {
            return Ok(None);
        };
        decode(&text).map(Some).ok_or_else(|| {
            Error::TypeArgument(format!("Value of {:?} is not a {}: {:?}", key, kind, text))
        })
    }

    /// Number of rows in the table; always asks the database
    pub fn count(&self) -> Result<usize> {
        tracing::debug!(store = %self.name, "count");
        let count: i64 = self
            .conn
            .query_row(&self.statements.count, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Writes ==========

    /// Store any scalar under its canonical string form
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<String> {
        let value = value.into();
        self.put(key, value.encode())
    }

    /// Store a JSON scalar. Arrays and objects are rejected before any write.
    pub fn set_json(&mut self, key: &str, value: &serde_json::Value) -> Result<String> {
        let value = Value::try_from(value.clone())?;
        self.set(key, value)
    }

    pub fn set_string(&mut self, key: &str, value: &str) -> Result<String> {
        self.put(key, value.to_string())
    }

    pub fn set_int(&mut self, key: &str, value: i64) -> Result<String> {
        self.put(key, value::encode_int(value))
    }

    pub fn set_float(&mut self, key: &str, value: f64) -> Result<String> {
        self.put(key, value::encode_float(value))
    }

    pub fn set_double(&mut self, key: &str, value: f64) -> Result<String> {
        self.set_float(key, value)
    }

    /// Stored as `"1"` or `"0"`
    pub fn set_boolean(&mut self, key: &str, value: bool) -> Result<String> {
        self.set_int(key, i64::from(value))
    }

    /// Parse a date in any accepted layout and store it as `YYYY-MM-DD HH:MM:SS`
    pub fn set_date(&mut self, key: &str, value: &str) -> Result<String> {
        let parsed = value::parse_date(value)?;
        self.set_datetime(key, parsed)
    }

    pub fn set_datetime(&mut self, key: &str, value: NaiveDateTime) -> Result<String> {
        self.put(key, value::encode_date(&value))
    }

    /// Add `amount` to the integer under `key`, returning the new value.
    ///
    /// A missing, empty or non-numeric value counts as zero. Read and write
    /// are separate statements, so concurrent incrementers can lose updates.
    pub fn increment(&mut self, key: &str, amount: i64) -> Result<i64> {
        let overflow = || Error::Overflow {
            key: key.to_string(),
            amount,
        };
        let current = self.get(key)?;
        let next = match current.as_deref().map(parse_counter) {
            Some(Counter::Int(base)) => base.checked_add(amount).ok_or_else(overflow)?,
            Some(Counter::OutOfRange) => return Err(overflow()),
            Some(Counter::Zero) | None => amount,
        };
        self.set_int(key, next)?;
        Ok(next)
    }

    pub fn increment_by_one(&mut self, key: &str) -> Result<i64> {
        self.increment(key, 1)
    }

    /// Upsert the row, then mirror it into the cache
    fn put(&mut self, key: &str, text: String) -> Result<String> {
        tracing::debug!(store = %self.name, key, "upsert");
        self.conn.execute(&self.statements.upsert, params![key, text])?;
        self.cache.insert(key.to_string(), text.clone());
        Ok(text)
    }

    /// Delete `key` whether or not it exists
    pub fn delete(&mut self, key: &str) -> Result<()> {
        tracing::debug!(store = %self.name, key, "delete");
        self.conn.execute(&self.statements.delete_one, [key])?;
        self.cache.remove(key);
        Ok(())
    }

    /// Delete every row. The cache state is left as it was.
    pub fn delete_all(&mut self) -> Result<()> {
        tracing::debug!(store = %self.name, "delete all");
        self.conn.execute(&self.statements.delete_all, [])?;
        self.cache.clear();
        Ok(())
    }

    // ========== Iteration ==========

    /// Start a fresh scan of the table
    pub fn rewind(&mut self) -> Result<()> {
        self.cursor.rewind(self.conn, &self.statements)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        self.cursor.next(self.conn, &self.statements)
    }

    pub fn valid(&self) -> bool {
        self.cursor.valid()
    }

    pub fn key(&self) -> Option<&str> {
        self.cursor.key()
    }

    pub fn current(&self) -> Option<&str> {
        self.cursor.current()
    }

    pub fn cursor_state(&self) -> CursorState {
        self.cursor.state()
    }

    /// Iterate over every row from the start, driving the cursor
    pub fn entries(&mut self) -> Entries<'_, 'db> {
        Entries {
            store: self,
            started: false,
            failed: false,
        }
    }
}

/// Row-by-row iterator over a store, from [`Store::entries`]
pub struct Entries<'s, 'db> {
    store: &'s mut Store<'db>,
    started: bool,
    failed: bool,
}

impl Iterator for Entries<'_, '_> {
    type Item = Result<(String, Option<String>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let step = if self.started {
            self.store.next()
        } else {
            self.started = true;
            self.store.rewind()
        };
        if let Err(e) = step {
            self.failed = true;
            return Some(Err(e));
        }

        let key = self.store.key()?.to_string();
        Some(Ok((key, self.store.current().map(String::from))))
    }
}

/// Integer reading of a stored counter
enum Counter {
    Int(i64),
    /// Numeric text past the `i64` range
    OutOfRange,
    /// Empty or non-numeric text
    Zero,
}

/// Floats truncate toward zero
fn parse_counter(text: &str) -> Counter {
    let text = text.trim();
    if text.is_empty() {
        return Counter::Zero;
    }
    if let Some(n) = value::decode_int(text) {
        return Counter::Int(n);
    }
    match value::decode_float(text) {
        Some(f) if !f.is_nan() => {
            let t = f.trunc();
            // i64::MAX as f64 rounds up to 2^63
            if t >= i64::MIN as f64 && t < i64::MAX as f64 {
                Counter::Int(t as i64)
            } else {
                Counter::OutOfRange
            }
        }
        _ => Counter::Zero,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    #[test]
    fn test_first_get_reads_from_table() {
        let db = Database::open_in_memory().unwrap();
        db.store("test").unwrap().set("k", "value").unwrap();

        let mut fresh = db.store("test").unwrap();
        assert_eq!(fresh.cache_len(), 0);
        assert_eq!(fresh.get("k").unwrap().as_deref(), Some("value"));
        assert_eq!(fresh.cache_len(), 1);
    }

    #[test]
    fn test_get_all() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        let expected: HashMap<String, String> =
            [("a", "1"), ("b", "2")].into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        assert_eq!(store.get_all().unwrap(), &expected);
        assert!(store.is_loaded());
    }

    #[test]
    fn test_get_all_merges_uncached_rows() {
        let db = Database::open_in_memory().unwrap();
        db.store("test").unwrap().set("elsewhere", "x").unwrap();

        let mut store = db.store("test").unwrap();
        store.set("here", "y").unwrap();
        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all["elsewhere"], "x");
    }

    #[test]
    fn test_set_get_scalars() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();

        let long_float = 123.451231237987623748_f64;
        let cases: Vec<(&str, Value)> = vec![
            ("key", "value".into()),
            ("0", "value".into()),
            ("", "empty key".into()),
            ("is_first", true.into()),
            ("number", i64::MAX.into()),
            ("price", 123.45_f64.into()),
            ("price2", long_float.into()),
            ("array", serde_json::json!([1, 2, 3]).to_string().into()),
        ];

        for (key, value) in cases {
            let expected = value.encode();
            assert_eq!(store.set(key, value).unwrap(), expected);
            assert_eq!(store.get(key).unwrap(), Some(expected));
        }
        assert_eq!(store.get("price").unwrap().as_deref(), Some("123.45"));
        assert_eq!(store.get("array").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_update_value() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_set_key_present_in_table_but_not_cache() {
        let db = Database::open_in_memory().unwrap();
        db.store("test").unwrap().set("k", "old").unwrap();

        let mut store = db.store("test").unwrap();
        store.set("k", "new").unwrap();

        assert_eq!(db.store("test").unwrap().get("k").unwrap().as_deref(), Some("new"));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_set_json_rejects_composites() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();

        for composite in [serde_json::json!([]), serde_json::json!({"a": 1})] {
            assert!(matches!(
                store.set_json("array", &composite),
                Err(Error::InvalidValue(_))
            ));
        }
        assert_eq!(store.cache_len(), 0);
        assert_eq!(store.count().unwrap(), 0);

        assert_eq!(store.set_json("n", &serde_json::json!(7)).unwrap(), "7");
    }

    #[test]
    fn test_set_get_int() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();

        for (key, value) in [("key", 100), ("0", 0), ("abc", i64::MAX), ("neg", -42)] {
            store.set_int(key, value).unwrap();
            assert_eq!(store.get(key).unwrap(), Some(value.to_string()));
            assert_eq!(store.get_int(key).unwrap(), Some(value));
        }
        store.set_int("n", 42).unwrap();
        assert_eq!(store.get("n").unwrap().as_deref(), Some("42"));
    }

    #[test]
    fn test_set_get_float_and_double() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();

        store.set_float("price", 123.45).unwrap();
        store.set_double("ratio", 0.1 + 0.2).unwrap();

        assert_eq!(store.get_float("price").unwrap(), Some(123.45));
        assert_eq!(store.get_double("ratio").unwrap(), Some(0.1 + 0.2));
        assert_eq!(store.get("ratio").unwrap(), Some((0.1_f64 + 0.2).to_string()));
    }

    #[test]
    fn test_set_get_boolean() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();

        for (key, value) in [("flag1", true), ("flag2", false), ("0", true)] {
            store.set_boolean(key, value).unwrap();
            assert_eq!(store.get_boolean(key).unwrap(), value);
        }
        assert_eq!(store.get("flag1").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("flag2").unwrap().as_deref(), Some("0"));
        assert!(!store.get_boolean("missing").unwrap());
    }

    #[test]
    fn test_set_get_date() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();

        let cases = [
            ("last_visit", "2012-06-12 15:00:03", "2012-06-12 15:00:03"),
            ("last_login", "2012-06-30", "2012-06-30 00:00:00"),
            ("created_date", "1970-01-01", "1970-01-01 00:00:00"),
        ];
        for (key, input, stored) in cases {
            assert_eq!(store.set_date(key, input).unwrap(), stored);
            assert_eq!(store.get(key).unwrap().as_deref(), Some(stored));
            let parsed = store.get_date(key).unwrap().unwrap();
            assert_eq!(value::encode_date(&parsed), stored);
        }

        assert!(matches!(
            store.set_date("bad", "the day after never"),
            Err(Error::DateParse(_))
        ));
        assert_eq!(store.get("bad").unwrap(), None);
    }

    #[test]
    fn test_typed_getter_on_wrong_kind() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();
        store.set("name", "alice").unwrap();

        assert!(matches!(store.get_int("name"), Err(Error::TypeArgument(_))));
        assert!(matches!(store.get_float("name"), Err(Error::TypeArgument(_))));
        assert!(matches!(store.get_date("name"), Err(Error::TypeArgument(_))));
        assert_eq!(store.get_int("missing").unwrap(), None);
    }

    #[test]
    fn test_increment() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();

        let amounts = [3, 1, 7, 10, 2];
        for amount in amounts {
            store.increment_by_one("count").unwrap();
            store.increment("total", amount).unwrap();
        }

        assert_eq!(store.get("count").unwrap(), Some(amounts.len().to_string()));
        assert_eq!(
            store.get("total").unwrap(),
            Some(amounts.iter().sum::<i64>().to_string())
        );
    }

    #[test]
    fn test_increment_non_numeric_counts_as_zero() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();

        store.set("word", "abc").unwrap();
        assert_eq!(store.increment("word", 5).unwrap(), 5);

        store.set("empty", "").unwrap();
        assert_eq!(store.increment_by_one("empty").unwrap(), 1);

        store.set("float", "2.7").unwrap();
        assert_eq!(store.increment_by_one("float").unwrap(), 3);

        store.set("neg", "-4").unwrap();
        assert_eq!(store.increment("neg", -1).unwrap(), -5);
    }

    #[test]
    fn test_increment_overflow_writes_nothing() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();
        store.set_int("big", i64::MAX).unwrap();

        assert!(matches!(
            store.increment_by_one("big"),
            Err(Error::Overflow { .. })
        ));
        assert_eq!(store.get_int("big").unwrap(), Some(i64::MAX));
    }

    #[test]
    fn test_increment_huge_float_text_overflows() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();

        for text in ["1e300", "-1e300", "9223372036854775808", "inf"] {
            store.set("huge", text).unwrap();
            assert!(
                matches!(store.increment("huge", 0), Err(Error::Overflow { .. })),
                "{text}"
            );
            assert_eq!(store.get("huge").unwrap().as_deref(), Some(text));
        }

        store.set("edge", "-9223372036854775808.0").unwrap();
        assert_eq!(store.increment("edge", 1).unwrap(), i64::MIN + 1);
    }

    #[test]
    fn test_entries_include_zero_and_negative_rowids() {
        let db = Database::open_in_memory().unwrap();
        db.connection()
            .execute("CREATE TABLE test (\"key\" TEXT PRIMARY KEY, \"value\" TEXT)", [])
            .unwrap();
        db.connection()
            .execute("INSERT INTO test (rowid, \"key\", \"value\") VALUES (0, 'zero', 'z')", [])
            .unwrap();

        let mut store = db.store("test").unwrap();
        store.set("a", "1").unwrap();
        let rows: Vec<_> = store.entries().collect::<Result<_>>().unwrap();

        assert_eq!(rows.len(), store.count().unwrap());
        assert_eq!(
            rows,
            vec![
                ("zero".to_string(), Some("z".to_string())),
                ("a".to_string(), Some("1".to_string())),
            ]
        );
    }

    #[test]
    fn test_delete() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();

        store.set("k", "value").unwrap();
        store.delete("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        store.delete("never-existed").unwrap();
        assert_eq!(store.get("never-existed").unwrap(), None);
    }

    #[test]
    fn test_delete_all() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();

        store.set("k", "value").unwrap();
        store.delete_all().unwrap();

        assert!(store.get_all().unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_all_keeps_cache_state() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();
        store.set("k", "v").unwrap();
        store.get_all().unwrap();

        store.delete_all().unwrap();
        assert_eq!(store.cache_state(), CacheState::Complete);

        // A row written behind this store's back is not seen by a complete cache
        db.store("test").unwrap().set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_complete_cache_skips_table_on_miss() {
        let db = Database::open_in_memory().unwrap();
        let mut loaded = db.store("test").unwrap();
        loaded.get_all().unwrap();

        let mut writer = db.store("test").unwrap();
        writer.set("late", "arrival").unwrap();

        assert_eq!(loaded.get("late").unwrap(), None);
        assert_eq!(writer.get("late").unwrap().as_deref(), Some("arrival"));
        assert_eq!(db.store("test").unwrap().get("late").unwrap().as_deref(), Some("arrival"));
    }

    #[test]
    fn test_partial_cache_serves_stale_value() {
        let db = Database::open_in_memory().unwrap();
        let mut reader = db.store("test").unwrap();
        reader.set("k", "one").unwrap();

        db.store("test").unwrap().set("k", "two").unwrap();
        assert_eq!(reader.get("k").unwrap().as_deref(), Some("one"));
    }

    #[test]
    fn test_null_value_reads_as_missing() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();
        db.connection()
            .execute("INSERT INTO \"test\" VALUES ('nothing', NULL)", [])
            .unwrap();

        assert_eq!(store.get("nothing").unwrap(), None);
        assert!(store.get_all().unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 1);

        store.rewind().unwrap();
        assert!(store.valid());
        assert_eq!(store.key(), Some("nothing"));
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_count() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();

        for i in 0..37i64 {
            store.set(&format!("key{}", i), i).unwrap();
        }
        assert_eq!(store.count().unwrap(), 37);

        db.store("test").unwrap().set("extra", "row").unwrap();
        assert_eq!(store.count().unwrap(), 38);
    }

    #[test]
    fn test_iteration() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();
        store.set("key1", "value1").unwrap();

        assert_eq!(store.cursor_state(), CursorState::Unstarted);
        store.rewind().unwrap();
        let mut seen = Vec::new();
        while store.valid() {
            seen.push((store.key().unwrap().to_string(), store.current().unwrap().to_string()));
            store.next().unwrap();
        }

        assert_eq!(seen, vec![("key1".to_string(), "value1".to_string())]);
        assert!(!store.valid());
        assert_eq!(store.cursor_state(), CursorState::Exhausted);
        assert_eq!(store.key(), None);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_iteration_ignores_cache() {
        let db = Database::open_in_memory().unwrap();
        db.store("test").unwrap().set("a", "1").unwrap();
        db.store("test").unwrap().set("b", "2").unwrap();

        let mut store = db.store("test").unwrap();
        let rows: Vec<_> = store.entries().collect::<Result<_>>().unwrap();

        assert_eq!(
            rows,
            vec![
                ("a".to_string(), Some("1".to_string())),
                ("b".to_string(), Some("2".to_string())),
            ]
        );
        assert_eq!(store.cache_len(), 0);
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_entries_restart_each_time() {
        let db = Database::open_in_memory().unwrap();
        let mut store = db.store("test").unwrap();
        store.set("a", "1").unwrap();
        assert_eq!(store.entries().count(), 1);

        store.set("b", "2").unwrap();
        assert_eq!(store.entries().count(), 2);
        assert_eq!(store.entries().count(), 2);
    }
}
