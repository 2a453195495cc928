//! Per-call connection handle.

use sqlx::{ConnectOptions, Connection};

use crate::error::StorageError;

/// Opens a fresh connection for every store operation.
///
/// Cloning is cheap: only the connect options are copied. Callers pair each
/// [`open`](Self::open) with a [`release`](Self::release); a connection dropped
/// on an error path is closed by sqlx when it goes out of scope.
#[derive(Debug, Clone)]
pub struct Connector<O> {
    options: O,
}

impl<O> Connector<O>
where
    O: ConnectOptions,
    O::Connection: Sized,
{
    #[must_use]
    pub fn new(options: O) -> Self {
        Self { options }
    }

    /// Establish a new connection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Connect`] if the store is unreachable or rejects
    /// the credentials.
    pub async fn open(&self) -> Result<O::Connection, StorageError> {
        self.options.connect().await.map_err(StorageError::Connect)
    }

    /// Close a connection gracefully. Failures are logged and otherwise ignored:
    /// the statement it served has already completed.
    pub async fn release(&self, conn: O::Connection) {
        if let Err(err) = conn.close().await {
            tracing::warn!(%err, "failed to close database connection");
        }
    }

    /// Open and immediately release a connection to prove the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Connect`] on failure.
    pub async fn verify(&self) -> Result<(), StorageError> {
        let conn = self.open().await?;
        self.release(conn).await;
        Ok(())
    }
}
