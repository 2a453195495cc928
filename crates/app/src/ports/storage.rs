//! Storage port — repository traits for persistence.
//!
//! Every method maps to exactly one statement against the store. Implementations
//! own how a connection is obtained for that statement and must release it
//! before the returned future completes.

use std::future::Future;

use metahive_domain::entry::Entry;
use metahive_domain::error::MetaHiveError;
use metahive_domain::tag::Tag;

/// Repository for [`Tag`]s, keyed by name.
pub trait TagRepository {
    /// Every tag, in whatever order the store returns them.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Tag>, MetaHiveError>> + Send;

    /// The tag whose name matches `name` exactly, if any.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Tag>, MetaHiveError>> + Send;

    /// Insert `tag`, or overwrite the id of the existing tag with the same name.
    fn upsert(&self, tag: Tag) -> impl Future<Output = Result<Tag, MetaHiveError>> + Send;
}

/// Repository for [`Entry`]s, keyed by id. Entries are never updated.
pub trait EntryRepository {
    /// The entry whose id matches `id` exactly, if any.
    fn find_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Entry>, MetaHiveError>> + Send;

    /// Insert a new entry. Fails when an entry with the same id already exists.
    fn create(&self, entry: Entry) -> impl Future<Output = Result<Entry, MetaHiveError>> + Send;
}
