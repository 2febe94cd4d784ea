use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::storage::DatabaseOptions;

pub const DEFAULT_DATABASE: &str = "nosqlite.db";
pub const DEFAULT_STORE: &str = "default";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NosqliteConfig {
    pub database: Option<String>,
    pub store: Option<String>,
    pub busy_timeout_ms: Option<u64>,
}

impl NosqliteConfig {
    /// Flag value first, then this config, then the built-in default
    pub fn database_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.database.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    pub fn store_name(&self, flag: Option<&str>) -> String {
        flag.or(self.store.as_deref())
            .unwrap_or(DEFAULT_STORE)
            .to_string()
    }

    pub fn database_options(&self) -> DatabaseOptions {
        DatabaseOptions {
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("nosqlite.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<NosqliteConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: NosqliteConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &NosqliteConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> crate::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
