//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `metahive.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::str::FromStr;

use metahive_adapter_storage_sqlx::{MySqlConfig, SqliteConfig};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Which relational store backs the tag and entry tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    #[default]
    Sqlite,
    Mysql,
}

impl FromStr for Driver {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(Self::Sqlite),
            "mysql" => Ok(Self::Mysql),
            other => Err(ConfigError::Validation(format!(
                "unknown database driver `{other}`"
            ))),
        }
    }
}

/// Database configuration.
///
/// `url` is used by the `SQLite` driver; `host`, `port`, `user`, `password`
/// and `name` by the `MySQL` driver.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub driver: Driver,
    /// `SQLite` connection URL.
    pub url: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Database (schema) name.
    pub name: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `metahive.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("metahive.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("METAHIVE_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("METAHIVE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("METAHIVE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("METAHIVE_DB_DRIVER") {
            self.database.driver = val.parse()?;
        }
        if let Some(val) = var("METAHIVE_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("METAHIVE_DB_HOST") {
            self.database.host = val;
        }
        if let Some(port) = var("METAHIVE_DB_PORT").and_then(|val| val.parse().ok()) {
            self.database.port = port;
        }
        if let Some(val) = var("METAHIVE_DB_USER") {
            self.database.user = val;
        }
        if let Some(val) = var("METAHIVE_DB_PASSWORD") {
            self.database.password = val;
        }
        if let Some(val) = var("METAHIVE_DB_NAME") {
            self.database.name = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("METAHIVE_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.driver == Driver::Mysql {
            for (field, value) in [
                ("database.host", &self.database.host),
                ("database.user", &self.database.user),
                ("database.name", &self.database.name),
            ] {
                if value.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "{field} is required for the mysql driver"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Settings for the `SQLite` storage backend.
    #[must_use]
    pub fn sqlite(&self) -> SqliteConfig {
        SqliteConfig {
            database_url: self.database.url.clone(),
        }
    }

    /// Settings for the `MySQL` storage backend.
    #[must_use]
    pub fn mysql(&self) -> MySqlConfig {
        MySqlConfig {
            host: self.database.host.clone(),
            port: self.database.port,
            user: self.database.user.clone(),
            password: self.database.password.clone(),
            database: self.database.name.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            driver: Driver::Sqlite,
            url: "sqlite:metahive.db?mode=rwc".to_string(),
            host: "localhost".to_string(),
            port: 3306,
            user: String::new(),
            password: String::new(),
            name: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "metahived=info,metahive=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
