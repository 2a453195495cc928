//! Shared application state for axum handlers.

use std::sync::Arc;

use metahive_app::ports::{EntryRepository, TagRepository};
use metahive_app::services::entry_service::EntryService;
use metahive_app::services::tag_service::TagService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<TR, ER> {
    /// Tag lookups and upserts.
    pub tag_service: Arc<TagService<TR>>,
    /// Entry lookups and inserts.
    pub entry_service: Arc<EntryService<ER>>,
}

impl<TR, ER> Clone for AppState<TR, ER> {
    fn clone(&self) -> Self {
        Self {
            tag_service: Arc::clone(&self.tag_service),
            entry_service: Arc::clone(&self.entry_service),
        }
    }
}

impl<TR, ER> AppState<TR, ER>
where
    TR: TagRepository + Send + Sync + 'static,
    ER: EntryRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(tag_service: TagService<TR>, entry_service: EntryService<ER>) -> Self {
        Self {
            tag_service: Arc::new(tag_service),
            entry_service: Arc::new(entry_service),
        }
    }
}
