use crate::{emit_success, OutputMode};
use nosqlite::config::{write_config, NosqliteConfig};
use nosqlite::ui::{self, Icons};
use nosqlite::value::{self, Value, ValueKind};
use nosqlite::{Database, DatabaseOptions};
use owo_colors::OwoColorize;
use serde_json::{json, Value as Json};
use std::path::{Path, PathBuf};

/// Resolved flags and config shared by every command
pub struct Context {
    pub database: PathBuf,
    pub store: String,
    pub options: DatabaseOptions,
    pub output_mode: OutputMode,
}

impl Context {
    fn open(&self) -> anyhow::Result<Database> {
        Ok(Database::open_with(&self.database, &self.options)?)
    }
}

pub fn run_get(ctx: &Context, key: &str, kind: ValueKind) -> anyhow::Result<()> {
    let db = ctx.open()?;
    let mut store = db.store(&ctx.store)?;

    let found: Option<Json> = match kind {
        ValueKind::Text => store.get(key)?.map(Json::from),
        ValueKind::Integer => store.get_int(key)?.map(Json::from),
        ValueKind::Float => store.get_float(key)?.map(Json::from),
        ValueKind::Boolean => Some(Json::from(store.get_boolean(key)?)),
        ValueKind::Date => store.get_date(key)?.map(|d| Json::from(value::encode_date(&d))),
    };

    if ctx.output_mode.is_human() {
        match &found {
            Some(Json::String(s)) => println!("{}", s),
            Some(other) => println!("{}", other),
            None => eprintln!("{} {}", Icons::EMPTY, ui::muted(&format!("no value for {:?}", key))),
        }
        return Ok(());
    }

    emit_success(
        ctx.output_mode,
        "get",
        json!({ "store": ctx.store, "key": key, "kind": kind, "value": found }),
    )
}

pub fn run_set(
    ctx: &Context,
    key: &str,
    raw: &str,
    kind: ValueKind,
    json_value: bool,
) -> anyhow::Result<()> {
    // Parse before opening so a bad value never touches the database
    let value = if json_value {
        let parsed: Json = serde_json::from_str(raw)?;
        Value::try_from(parsed)?
    } else {
        Value::parse_as(kind, raw)?
    };

    let db = ctx.open()?;
    let mut store = db.store(&ctx.store)?;
    let stored = store.set(key, value.clone())?;

    if ctx.output_mode.is_human() {
        ui::key_value(key, &format!("{} {}", stored, ui::muted(&format!("({})", value.kind()))));
        return Ok(());
    }

    emit_success(
        ctx.output_mode,
        "set",
        json!({ "store": ctx.store, "key": key, "kind": value.kind(), "stored": stored }),
    )
}

pub fn run_incr(ctx: &Context, key: &str, by: i64) -> anyhow::Result<()> {
    let db = ctx.open()?;
    let mut store = db.store(&ctx.store)?;
    let next = store.increment(key, by)?;

    if ctx.output_mode.is_human() {
        println!("{}", next);
        return Ok(());
    }

    emit_success(
        ctx.output_mode,
        "incr",
        json!({ "store": ctx.store, "key": key, "value": next }),
    )
}

pub fn run_delete(ctx: &Context, key: &str) -> anyhow::Result<()> {
    let db = ctx.open()?;
    let mut store = db.store(&ctx.store)?;
    store.delete(key)?;

    if ctx.output_mode.is_human() {
        println!("{} {}", Icons::DEL, ui::dim(&format!("deleted {:?}", key)));
        return Ok(());
    }

    emit_success(ctx.output_mode, "delete", json!({ "store": ctx.store, "key": key }))
}

pub fn run_clear(ctx: &Context) -> anyhow::Result<()> {
    let db = ctx.open()?;
    let mut store = db.store(&ctx.store)?;
    let removed = store.count()?;
    store.delete_all()?;

    if ctx.output_mode.is_human() {
        ui::success(&format!("Cleared {} keys from {}", removed, ctx.store));
        return Ok(());
    }

    emit_success(ctx.output_mode, "clear", json!({ "store": ctx.store, "removed": removed }))
}

pub fn run_list(ctx: &Context) -> anyhow::Result<()> {
    let db = ctx.open()?;
    let mut store = db.store(&ctx.store)?;
    let entries = store.entries().collect::<nosqlite::Result<Vec<_>>>()?;

    if ctx.output_mode.is_human() {
        if entries.is_empty() {
            println!("{} {}", Icons::EMPTY, ui::muted(&format!("store {} is empty", ctx.store)));
        } else {
            println!("{}", ui::entries_table(&entries));
            ui::summary_row("Keys:", &entries.len().to_string());
        }
        return Ok(());
    }

    let rows: Vec<Json> = entries
        .iter()
        .map(|(key, value)| json!({ "key": key, "value": value }))
        .collect();
    emit_success(ctx.output_mode, "list", json!({ "store": ctx.store, "entries": rows }))
}

pub fn run_count(ctx: &Context) -> anyhow::Result<()> {
    let db = ctx.open()?;
    let store = db.store(&ctx.store)?;
    let count = store.count()?;

    if ctx.output_mode.is_human() {
        println!("{}", count);
        return Ok(());
    }

    emit_success(ctx.output_mode, "count", json!({ "store": ctx.store, "count": count }))
}

pub fn run_stores(ctx: &Context) -> anyhow::Result<()> {
    let db = ctx.open()?;
    let mut stores = Vec::new();
    for name in db.store_names()? {
        let count = db.store(&name)?.count()?;
        stores.push((name, count));
    }

    if ctx.output_mode.is_human() {
        ui::header(&format!("{}", ctx.database.display()));
        if stores.is_empty() {
            println!("{} {}", Icons::EMPTY, ui::muted("no stores yet"));
        }
        for (name, count) in &stores {
            ui::summary_row(&format!("{} {}", Icons::PACKAGE, name), &format!("{} keys", count));
        }
        return Ok(());
    }

    let data: Vec<Json> = stores
        .iter()
        .map(|(name, count)| json!({ "name": name, "count": count }))
        .collect();
    emit_success(ctx.output_mode, "stores", json!({ "stores": data }))
}

pub fn run_init(ctx: &Context, config_path: &Path, force: bool) -> anyhow::Result<()> {
    let config = NosqliteConfig {
        database: Some(ctx.database.display().to_string()),
        store: Some(ctx.store.clone()),
        busy_timeout_ms: ctx.options.busy_timeout_ms,
    };
    write_config(config_path, &config, force)?;

    if ctx.output_mode.is_human() {
        ui::success(&format!("Wrote {}", config_path.display()));
        ui::info("database", &ctx.database.display().to_string());
        ui::info("store", &ctx.store);
        return Ok(());
    }

    emit_success(
        ctx.output_mode,
        "init",
        json!({ "path": config_path.display().to_string(), "config": config }),
    )
}

pub fn run_version(output_mode: OutputMode) -> anyhow::Result<()> {
    if output_mode.is_human() {
        println!(
            "{} {}",
            "nosqlite".bold().style(ui::theme().info.clone()),
            env!("CARGO_PKG_VERSION")
        );
        return Ok(());
    }

    emit_success(output_mode, "version", json!({ "version": env!("CARGO_PKG_VERSION") }))
}
