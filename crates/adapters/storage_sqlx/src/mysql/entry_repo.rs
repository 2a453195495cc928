//! `MySQL` implementation of [`EntryRepository`].

use std::future::Future;

use metahive_app::ports::EntryRepository;
use metahive_domain::entry::Entry;
use metahive_domain::error::MetaHiveError;

use super::MySqlConnector;
use crate::error::StorageError;
use crate::rows::EntryRow;

const SELECT_BY_ID: &str = "SELECT id, base_id FROM entries WHERE id = ? LIMIT 1";
const INSERT: &str = "INSERT INTO entries (id, base_id) VALUES (?, ?)";

/// `MySQL`-backed entry repository.
#[derive(Clone)]
pub struct MySqlEntryRepository {
    connector: MySqlConnector,
}

impl MySqlEntryRepository {
    /// Create a new repository that opens connections through `connector`.
    #[must_use]
    pub fn new(connector: MySqlConnector) -> Self {
        Self { connector }
    }
}

impl EntryRepository for MySqlEntryRepository {
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
    use crate::mysql::testing::{connector, unique};

    async fn setup() -> MySqlEntryRepository {
        MySqlEntryRepository::new(connector().await)
    }

    #[tokio::test]
    #[ignore = "needs a MySQL server in METAHIVE_TEST_MYSQL_URL"]
    async fn should_create_and_find_entry() {
        let repo = setup().await;
        let id = unique("e2");

        repo.create(Entry::new(&id, "e1")).await.unwrap();

        let fetched = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(fetched, Entry::new(&id, "e1"));
    }

    #[tokio::test]
    #[ignore = "needs a MySQL server in METAHIVE_TEST_MYSQL_URL"]
    async fn should_return_none_when_entry_not_found() {
        let repo = setup().await;
        assert!(repo.find_by_id(&unique("missing")).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "needs a MySQL server in METAHIVE_TEST_MYSQL_URL"]
    async fn should_fail_with_native_message_when_id_exists() {
        let repo = setup().await;
        let id = unique("e2");
        repo.create(Entry::new(&id, "e1")).await.unwrap();

        let err = repo.create(Entry::new(&id, "other")).await.unwrap_err();
        assert!(matches!(err, MetaHiveError::Storage(_)));
        assert!(err.to_string().starts_with("Duplicate entry"), "{err}");

        let kept = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(kept.base_id, "e1");
    }

    #[tokio::test]
    #[ignore = "needs a MySQL server in METAHIVE_TEST_MYSQL_URL"]
    async fn should_store_quotes_verbatim() {
        let repo = setup().await;
        let id = format!("o'{}", unique("brien"));

        repo.create(Entry::new(&id, "x' OR '1'='1")).await.unwrap();

        let fetched = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(fetched.base_id, "x' OR '1'='1");
    }
}
