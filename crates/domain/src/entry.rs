//! Entry — an identifier mapped to the base entry it derives from.

/// Links an entry to its base. `id` is the primary key; entries are insert-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub base_id: String,
}

impl Entry {
    #[must_use]
    pub fn new(id: impl Into<String>, base_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            base_id: base_id.into(),
        }
    }
}
