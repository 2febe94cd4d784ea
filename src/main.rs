//! nosqlite CLI - read and edit key-value stores from the shell

use clap::{Parser, Subcommand};
use nosqlite::ValueKind;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "nosqlite")]
#[command(version)]
#[command(about = "Named key-value stores backed by SQLite tables")]
#[command(long_about = r#"
nosqlite keeps string values under string keys, one SQLite table per store.

Example usage:
  nosqlite set greeting hello
  nosqlite --store counters incr visits --by 5
  nosqlite set launched "June 12, 2012" --type date
  nosqlite get launched --type date
  nosqlite list
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of human output
    #[arg(long, global = true)]
    json: bool,

    /// Path to the database file (default: config, then nosqlite.db)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Store (table) name (default: config, then "default")
    #[arg(short, long, global = true)]
    store: Option<String>,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value stored under a key
    Get {
        key: String,

        /// Interpret the stored text as this kind (text, int, float, bool, date)
        #[arg(short = 't', long = "type", default_value = "text", value_parser = parse_kind)]
        kind: ValueKind,
    },

    /// Store a value under a key
    Set {
        key: String,

        value: String,

        /// Parse the value as this kind before storing it
        #[arg(short = 't', long = "type", default_value = "text", value_parser = parse_kind)]
        kind: ValueKind,

        /// Parse the value as a JSON scalar (arrays and objects are rejected)
        #[arg(long, conflicts_with = "kind")]
        json_value: bool,
    },

    /// Add to the integer stored under a key
    Incr {
        key: String,

        /// Amount to add
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        by: i64,
    },

    /// Delete a key
    Delete { key: String },

    /// Delete every key in the store
    Clear,

    /// List every key and value in the store
    List,

    /// Count the keys in the store
    Count,

    /// List the stores in the database
    Stores,

    /// Write a nosqlite.toml with the current database and store
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show version information
    Version,
}

fn parse_kind(s: &str) -> Result<ValueKind, String> {
    s.parse::<ValueKind>().map_err(|e| e.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn is_human(self) -> bool {
        self == OutputMode::Human
    }
}

/// Print the JSON success envelope
pub fn emit_success(
    output_mode: OutputMode,
    command: &str,
    data: serde_json::Value,
) -> anyhow::Result<()> {
    if output_mode.is_human() {
        return Ok(());
    }
    let envelope = serde_json::json!({
        "ok": true,
        "command": command,
        "data": data,
    });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

fn emit_error(output_mode: OutputMode, err: &anyhow::Error) {
    if output_mode.is_human() {
        nosqlite::ui::error(&format!("{:#}", err));
    } else {
        let envelope = serde_json::json!({
            "ok": false,
            "error": format!("{:#}", err),
        });
        println!("{}", envelope);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match run(cli, output_mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            emit_error(output_mode, &err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, output_mode: OutputMode) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(nosqlite::config::default_config_path);
    let config = nosqlite::config::load_config(Some(config_path.as_path()))?.unwrap_or_default();

    let ctx = commands::Context {
        database: config.database_path(cli.database.as_deref()),
        store: config.store_name(cli.store.as_deref()),
        options: config.database_options(),
        output_mode,
    };

    match cli.command {
        Commands::Get { key, kind } => commands::run_get(&ctx, &key, kind),
        Commands::Set {
            key,
            value,
            kind,
            json_value,
        } => commands::run_set(&ctx, &key, &value, kind, json_value),
        Commands::Incr { key, by } => commands::run_incr(&ctx, &key, by),
        Commands::Delete { key } => commands::run_delete(&ctx, &key),
        Commands::Clear => commands::run_clear(&ctx),
        Commands::List => commands::run_list(&ctx),
        Commands::Count => commands::run_count(&ctx),
        Commands::Stores => commands::run_stores(&ctx),
        Commands::Init { force } => commands::run_init(&ctx, &config_path, force),
        Commands::Version => commands::run_version(output_mode),
    }
}
