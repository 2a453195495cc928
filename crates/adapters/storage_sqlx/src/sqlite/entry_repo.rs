//! `SQLite` implementation of [`EntryRepository`].

use std::future::Future;

use metahive_app::ports::EntryRepository;
use metahive_domain::entry::Entry;
use metahive_domain::error::MetaHiveError;

use super::SqliteConnector;
use crate::error::StorageError;
use crate::rows::EntryRow;

const SELECT_BY_ID: &str = "SELECT id, base_id FROM entries WHERE id = ? LIMIT 1";
const INSERT: &str = "INSERT INTO entries (id, base_id) VALUES (?, ?)";

/// `SQLite`-backed entry repository.
#[derive(Clone)]
pub struct SqliteEntryRepository {
    connector: SqliteConnector,
}

impl SqliteEntryRepository {
    /// Create a new repository that opens connections through `connector`.
    #[must_use]
    pub fn new(connector: SqliteConnector) -> Self {
        Self { connector }
    }
}

impl EntryRepository for SqliteEntryRepository {
    fn find_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Entry>, MetaHiveError>> + Send {
        let connector = self.connector.clone();
        let id = id.to_owned();
        async move {
            let mut conn = connector.open().await?;
            let row: Option<EntryRow> = sqlx::query_as(SELECT_BY_ID)
                .bind(id)
                .fetch_optional(&mut conn)
                .await
                .map_err(StorageError::Query)?;
            connector.release(conn).await;

            Ok(row.map(Entry::from))
        }
    }

    fn create(&self, entry: Entry) -> impl Future<Output = Result<Entry, MetaHiveError>> + Send {
        let connector = self.connector.clone();
        async move {
            let mut conn = connector.open().await?;
            sqlx::query(INSERT)
                .bind(&entry.id)
                .bind(&entry.base_id)
                .execute(&mut conn)
                .await
                .map_err(StorageError::Query)?;
            connector.release(conn).await;

            Ok(entry)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::testing::TempDatabase;

    async fn setup(db: &TempDatabase) -> SqliteEntryRepository {
        SqliteEntryRepository::new(db.connector().await)
    }

    #[tokio::test]
    async fn should_create_and_find_entry() {
        let db = TempDatabase::new();
        let repo = setup(&db).await;

        repo.create(Entry::new("e2", "e1")).await.unwrap();

        let fetched = repo.find_by_id("e2").await.unwrap().unwrap();
        assert_eq!(fetched, Entry::new("e2", "e1"));
    }

    #[tokio::test]
    async fn should_return_none_when_entry_not_found() {
        let db = TempDatabase::new();
        let repo = setup(&db).await;
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_reject_duplicate_id_with_native_message() {
        let db = TempDatabase::new();
        let repo = setup(&db).await;
        repo.create(Entry::new("e2", "e1")).await.unwrap();

        let err = repo.create(Entry::new("e2", "other")).await.unwrap_err();
        assert!(matches!(err, MetaHiveError::Storage(_)));
        assert_eq!(err.to_string(), "UNIQUE constraint failed: entries.id");

        let fetched = repo.find_by_id("e2").await.unwrap().unwrap();
        assert_eq!(fetched.base_id, "e1");
    }

    #[tokio::test]
    async fn should_store_quotes_verbatim() {
        let db = TempDatabase::new();
        let repo = setup(&db).await;

        repo.create(Entry::new("it's", "base'); DROP TABLE entries; --"))
            .await
            .unwrap();

        let fetched = repo.find_by_id("it's").await.unwrap().unwrap();
        assert_eq!(fetched.base_id, "base'); DROP TABLE entries; --");
    }
}
