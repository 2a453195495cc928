//! [`TagRepository`] and [`EntryRepository`] over HTTP.

use std::future::Future;

use reqwest::Client;

use metahive_app::ports::{EntryRepository, TagRepository};
use metahive_domain::entry::Entry;
use metahive_domain::error::MetaHiveError;
use metahive_domain::tag::Tag;

use crate::error::ClientError;

/// Client for a metahive server's `/api` endpoint.
///
/// Every repository call is one `GET` request. Cloning shares the underlying
/// connection pool of the [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpMetaHiveClient {
    client: Client,
    endpoint: String,
}

impl HttpMetaHiveClient {
    /// Create a client for the server at `address` (e.g. `http://localhost:3000`).
    #[must_use]
    pub fn new(address: &str) -> Self {
        Self::with_client(Client::new(), address)
    }

    /// Create a client that sends requests through an existing [`Client`].
    #[must_use]
    pub fn with_client(client: Client, address: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/api", address.trim_end_matches('/')),
        }
    }

    /// The full URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call(&self, params: &[(&str, &str)]) -> Result<String, ClientError> {
        let response = self.client.get(&self.endpoint).query(params).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }
        Ok(body)
    }
}

fn non_empty(body: String) -> Option<String> {
    if body.is_empty() { None } else { Some(body) }
}

impl TagRepository for HttpMetaHiveClient {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Tag>, MetaHiveError>> + Send {
        let this = self.clone();
        async move {
            let body = this.call(&[("action", "get_tags")]).await?;
            let tags: Vec<Tag> = serde_json::from_str(&body).map_err(ClientError::from)?;
            Ok(tags)
        }
    }

    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Tag>, MetaHiveError>> + Send {
        let this = self.clone();
        let name = name.to_owned();
        async move {
            let body = this
                .call(&[("action", "find_tag_by_name"), ("name", name.as_str())])
                .await?;
            Ok(non_empty(body).map(|id| Tag { name, id }))
        }
    }

    fn upsert(&self, tag: Tag) -> impl Future<Output = Result<Tag, MetaHiveError>> + Send {
        let this = self.clone();
        async move {
            this.call(&[
                ("action", "update_tag"),
                ("name", tag.name.as_str()),
                ("new_id", tag.id.as_str()),
            ])
            .await?;
            Ok(tag)
        }
    }
}

impl EntryRepository for HttpMetaHiveClient {
    fn find_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Entry>, MetaHiveError>> + Send {
        let this = self.clone();
        let id = id.to_owned();
        async move {
            let body = this.call(&[("action", "find_entry"), ("id", id.as_str())]).await?;
            Ok(non_empty(body).map(|base_id| Entry { id, base_id }))
        }
    }

    fn create(&self, entry: Entry) -> impl Future<Output = Result<Entry, MetaHiveError>> + Send {
        let this = self.clone();
        async move {
            this.call(&[
                ("action", "add_entry"),
                ("id", entry.id.as_str()),
                ("base_id", entry.base_id.as_str()),
            ])
            .await?;
            Ok(entry)
        }
    }
}
