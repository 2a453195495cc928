//! Row shapes shared by both backends.

use metahive_domain::entry::Entry;
use metahive_domain::tag::Tag;

#[derive(sqlx::FromRow)]
pub(crate) struct TagRow {
    name: String,
    id: String,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Self {
            name: row.name,
            id: row.id,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct EntryRow {
    id: String,
    base_id: String,
}

impl From<EntryRow> for Entry {
    fn from(row: EntryRow) -> Self {
        Self {
            id: row.id,
            base_id: row.base_id,
        }
    }
}
