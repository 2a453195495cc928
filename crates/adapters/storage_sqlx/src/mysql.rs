//! `MySQL` backend: configuration and repositories.
//!
//! The `tags` and `entries` tables are managed outside metahive; this backend
//! only reads and writes them.

mod entry_repo;
mod tag_repo;

use sqlx::mysql::MySqlConnectOptions;

use crate::connector::Connector;
use crate::error::StorageError;

pub use entry_repo::MySqlEntryRepository;
pub use tag_repo::MySqlTagRepository;

/// Connector for a `MySQL` server.
pub type MySqlConnector = Connector<MySqlConnectOptions>;

/// Configuration for the `MySQL` storage backend.
#[derive(Debug, Clone)]
pub struct MySqlConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Name of the database holding the `tags` and `entries` tables.
    pub database: String,
}

impl MySqlConfig {
    fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);
        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }

    /// Build a [`MySqlConnector`] and check that the server accepts the
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Connect`] if the server is unreachable or rejects
    /// the login.
    pub async fn build(self) -> Result<MySqlConnector, StorageError> {
        let connector = Connector::new(self.connect_options());
        connector.verify().await?;
        Ok(connector)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_report_connect_error_when_server_unreachable() {
        let config = MySqlConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "metahive".to_string(),
            password: "secret".to_string(),
            database: "metahive".to_string(),
        };

        let err = config.build().await.unwrap_err();
        assert!(matches!(err, StorageError::Connect(_)));
        assert!(!err.to_string().is_empty());
    }
}
