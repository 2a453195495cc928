//! `MySQL` implementation of [`TagRepository`].

use std::future::Future;

use metahive_app::ports::TagRepository;
use metahive_domain::error::MetaHiveError;
use metahive_domain::tag::Tag;

use super::MySqlConnector;
use crate::error::StorageError;
use crate::rows::TagRow;

const SELECT_ALL: &str = "SELECT name, id FROM tags";
const SELECT_BY_NAME: &str = "SELECT name, id FROM tags WHERE name = ?";
const UPSERT: &str = "INSERT INTO tags (name, id) VALUES (?, ?) ON DUPLICATE KEY UPDATE id = ?";

/// `MySQL`-backed tag repository.
#[derive(Clone)]
pub struct MySqlTagRepository {
    connector: MySqlConnector,
}

impl MySqlTagRepository {
    /// Create a new repository that opens connections through `connector`.
    #[must_use]
    pub fn new(connector: MySqlConnector) -> Self {
        Self { connector }
    }
}

impl TagRepository for MySqlTagRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Tag>, MetaHiveError>> + Send {
        let connector = self.connector.clone();
        async move {
            let mut conn = connector.open().await?;
            let rows: Vec<TagRow> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&mut conn)
                .await
                .map_err(StorageError::Query)?;
            connector.release(conn).await;

            Ok(rows.into_iter().map(Tag::from).collect())
        }
    }

    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Tag>, MetaHiveError>> + Send {
        let connector = self.connector.clone();
        let name = name.to_owned();
        async move {
            let mut conn = connector.open().await?;
            let row: Option<TagRow> = sqlx::query_as(SELECT_BY_NAME)
                .bind(name)
                .fetch_optional(&mut conn)
                .await
                .map_err(StorageError::Query)?;
            connector.release(conn).await;

            Ok(row.map(Tag::from))
        }
    }

    fn upsert(&self, tag: Tag) -> impl Future<Output = Result<Tag, MetaHiveError>> + Send {
        let connector = self.connector.clone();
        async move {
            let mut conn = connector.open().await?;
            sqlx::query(UPSERT)
                .bind(&tag.name)
                .bind(&tag.id)
                .bind(&tag.id)
                .execute(&mut conn)
                .await
                .map_err(StorageError::Query)?;
            connector.release(conn).await;

            Ok(tag)
        }
    }
}
