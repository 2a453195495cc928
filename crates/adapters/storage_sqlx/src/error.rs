//! Storage-specific error type wrapping sqlx errors.

use metahive_domain::error::MetaHiveError;

/// Errors originating from the relational storage layer.
///
/// The `Display` output of the sqlx-backed variants is the store's own message
/// (e.g. `UNIQUE constraint failed: entries.id`) rather than sqlx's wrapper text,
/// so it can be handed to callers verbatim.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store could not be reached or rejected the credentials.
    #[error("{}", native_message(.0))]
    Connect(#[source] sqlx::Error),

    /// A statement failed.
    #[error("{}", native_message(.0))]
    Query(#[source] sqlx::Error),

    /// The database URL cannot be used with per-call connections.
    #[error("in-memory database `{0}` does not outlive a single connection")]
    UnsupportedUrl(String),
}

fn native_message(err: &sqlx::Error) -> String {
    err.as_database_error()
        .map_or_else(|| err.to_string(), |db| db.message().to_owned())
}

impl From<StorageError> for MetaHiveError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
