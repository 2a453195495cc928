//! `SQLite` backend: configuration, schema bootstrap and repositories.

mod entry_repo;
mod tag_repo;

use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;

use crate::connector::Connector;
use crate::error::StorageError;

pub use entry_repo::SqliteEntryRepository;
pub use tag_repo::SqliteTagRepository;

/// Connector for a `SQLite` database file.
pub type SqliteConnector = Connector<SqliteConnectOptions>;

const CREATE_TAGS: &str = "CREATE TABLE IF NOT EXISTS tags (name TEXT NOT NULL PRIMARY KEY, id TEXT NOT NULL)";
const CREATE_ENTRIES: &str = "CREATE TABLE IF NOT EXISTS entries (id TEXT NOT NULL PRIMARY KEY, base_id TEXT NOT NULL)";

/// Configuration for the `SQLite` storage backend.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// `SQLite` connection URL (e.g. `sqlite:metahive.db?mode=rwc`).
    pub database_url: String,
}

impl SqliteConfig {
    /// Build a [`SqliteConnector`] from this configuration.
    ///
    /// Creates the database file if missing and makes sure the `tags` and
    /// `entries` tables exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UnsupportedUrl`] for in-memory databases, which
    /// would vanish between connections, and [`StorageError`] if the URL is
    /// invalid or the tables cannot be created.
    pub async fn build(self) -> Result<SqliteConnector, StorageError> {
        if self.database_url.contains(":memory:") || self.database_url.contains("mode=memory") {
            return Err(StorageError::UnsupportedUrl(self.database_url));
        }

        let options = SqliteConnectOptions::from_str(&self.database_url)
            .map_err(StorageError::Connect)?
            .create_if_missing(true);
        let connector = Connector::new(options);

        let mut conn = connector.open().await?;
        for statement in [CREATE_TAGS, CREATE_ENTRIES] {
            sqlx::query(statement)
                .execute(&mut conn)
                .await
                .map_err(StorageError::Query)?;
        }
        connector.release(conn).await;

        Ok(connector)
    }
}
