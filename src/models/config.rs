//! Configuration model.
//!
//! Connection parameters can be set via environment variables:
//! - `CLICKHOUSE_HOST`: warehouse host (default: localhost)
//! - `CLICKHOUSE_PORT`: HTTP interface port (default: 8123)
//! - `CLICKHOUSE_USER`: user name (default: default)
//! - `CLICKHOUSE_PASSWORD`: password (default: empty)
//! - `CLICKHOUSE_DATABASE`: database to query (default: dwh)
//! - `CLICKHOUSE_TIMEOUT`: request timeout in seconds (default: 60)
//!
//! Environment variables override values from `config.toml` in the user
//! config directory, which override the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 8123;
const DEFAULT_USER: &str = "default";
const DEFAULT_DATABASE: &str = "dwh";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// ClickHouse connection parameters. Built once, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickHouseConfig {
    /// Warehouse host.
    pub host: String,
    /// HTTP interface port.
    pub port: u16,
    /// User name.
    pub user: String,
    /// Password. Never hardcode this; use CLICKHOUSE_PASSWORD or config.toml.
    pub password: String,
    /// Database the report view lives in.
    pub database: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClickHouseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: String::new(),
            database: DEFAULT_DATABASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClickHouseConfig {
    /// Apply environment variable overrides on top of this config.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("CLICKHOUSE_HOST") {
            self.host = host;
        }
        if let Some(port) = std::env::var("CLICKHOUSE_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.port = port;
        }
        if let Ok(user) = std::env::var("CLICKHOUSE_USER") {
            self.user = user;
        }
        if let Ok(password) = std::env::var("CLICKHOUSE_PASSWORD") {
            self.password = password;
        }
        if let Ok(database) = std::env::var("CLICKHOUSE_DATABASE") {
            self.database = database;
        }
        if let Some(timeout) = std::env::var("CLICKHOUSE_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.timeout_secs = timeout;
        }
        self
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promoter_report")
}

/// Load configuration from a specific file. Missing fields fall back to
/// defaults; a missing or unparsable file yields the defaults.
pub fn load_config_from(path: &Path) -> ClickHouseConfig {
    if path.exists() {
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
    }

    ClickHouseConfig::default()
}

/// Load configuration: defaults, then config file, then environment.
pub fn load_config() -> ClickHouseConfig {
    let config_path = dirs_config_path().join("config.toml");
    load_config_from(&config_path).with_env_overrides()
}
