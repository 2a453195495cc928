//! Tag — a human-readable name mapped to an opaque identifier.

use serde::{Deserialize, Serialize};

/// A named label pointing at an opaque identifier.
///
/// `name` is the unique key. Neither field is validated: any string the caller
/// supplies is stored as-is. The serialized form uses `Name`/`Id` keys, which is
/// the wire format of the `get_tags` action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub name: String,
    pub id: String,
}

impl Tag {
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}
