//! Entry service — use-cases for recording and resolving entry bases.

use metahive_domain::entry::Entry;
use metahive_domain::error::MetaHiveError;

use crate::ports::EntryRepository;

/// Application service for entry lookups and inserts.
pub struct EntryService<R> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up an entry by its exact id. A missing entry is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_entry(&self, id: &str) -> Result<Option<Entry>, MetaHiveError> {
        self.repo.find_by_id(id).await
    }

    /// Record that entry `id` derives from `base_id`.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store rejects the insert, including
    /// when an entry with the same `id` already exists.
    #[tracing::instrument(skip(self))]
    pub async fn add_entry(&self, id: &str, base_id: &str) -> Result<Entry, MetaHiveError> {
        self.repo.create(Entry::new(id, base_id)).await
    }
}
