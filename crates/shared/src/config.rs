//! Application configuration management.
//!
//! Sources are layered: `config/default.toml`, then `config/{RUN_MODE}.toml`,
//! then `TALLY__*` environment variables.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Dashboard and export configuration.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL (`postgres://…` or `sqlite://…`).
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait for a connection before giving up.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Run pending migrations on startup.
    #[serde(default)]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
            auto_migrate: false,
        }
    }
}

fn default_database_url() -> String {
    "sqlite://tally.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout_secs() -> u64 {
    8
}

/// Dashboard and export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Default number of rows for the recent-expenses list.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u64,
    /// Upper bound a caller may request for the recent-expenses list.
    #[serde(default = "default_max_recent_limit")]
    pub max_recent_limit: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            max_recent_limit: default_max_recent_limit(),
        }
    }
}

fn default_recent_limit() -> u64 {
    5
}

fn default_max_recent_limit() -> u64 {
    50
}

impl ExportConfig {
    /// Resolves a caller-supplied limit against the configured default and cap.
    #[must_use]
    pub fn clamp_recent_limit(&self, requested: Option<u64>) -> u64 {
        requested
            .unwrap_or(self.recent_limit)
            .clamp(1, self.max_recent_limit.max(1))
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
