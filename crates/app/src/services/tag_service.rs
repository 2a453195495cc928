//! Tag service — use-cases for reading and updating tags.

use metahive_domain::error::MetaHiveError;
use metahive_domain::tag::Tag;

use crate::ports::TagRepository;

/// Application service for tag lookups and upserts.
pub struct TagService<R> {
    repo: R,
}

impl<R: TagRepository> TagService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all tags. The order is whatever the store yields and must not be
    /// relied upon.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_tags(&self) -> Result<Vec<Tag>, MetaHiveError> {
        self.repo.get_all().await
    }

    /// Look up a tag by its exact name. A missing tag is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_tag(&self, name: &str) -> Result<Option<Tag>, MetaHiveError> {
        self.repo.find_by_name(name).await
    }

    /// Point the tag `name` at `new_id`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn update_tag(&self, name: &str, new_id: &str) -> Result<Tag, MetaHiveError> {
        self.repo.upsert(Tag::new(name, new_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryTagRepo {
        store: Mutex<HashMap<String, String>>,
    }

    impl TagRepository for InMemoryTagRepo {
        fn get_all(&self) -> impl Future<Output = Result<Vec<Tag>, MetaHiveError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Tag> = store
                .iter()
                .map(|(name, id)| Tag::new(name.as_str(), id.as_str()))
                .collect();
            async { Ok(result) }
        }

        fn find_by_name(
            &self,
            name: &str,
        ) -> impl Future<Output = Result<Option<Tag>, MetaHiveError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(name).map(|id| Tag::new(name, id.as_str()));
            async { Ok(result) }
        }

        fn upsert(&self, tag: Tag) -> impl Future<Output = Result<Tag, MetaHiveError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(tag.name.clone(), tag.id.clone());
            async { Ok(tag) }
        }
    }

    fn make_service() -> TagService<InMemoryTagRepo> {
        TagService::new(InMemoryTagRepo::default())
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_tags() {
        let svc = make_service();
        assert!(svc.list_tags().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_find_tag_after_update() {
        let svc = make_service();
        svc.update_tag("release", "v1").await.unwrap();

        let tag = svc.find_tag("release").await.unwrap().unwrap();
        assert_eq!(tag, Tag::new("release", "v1"));
    }

    #[tokio::test]
    async fn should_return_none_when_tag_missing() {
        let svc = make_service();
        assert!(svc.find_tag("unknown").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_keep_single_tag_with_latest_id_when_updated_twice() {
        let svc = make_service();
        svc.update_tag("release", "v1").await.unwrap();
        svc.update_tag("release", "v2").await.unwrap();

        let all = svc.list_tags().await.unwrap();
        assert_eq!(all, vec![Tag::new("release", "v2")]);
    }

    #[tokio::test]
    async fn should_list_every_tag() {
        let svc = make_service();
        svc.update_tag("a", "1").await.unwrap();
        svc.update_tag("b", "2").await.unwrap();

        let mut all = svc.list_tags().await.unwrap();
        all.sort_by(|l, r| l.name.cmp(&r.name));
        assert_eq!(all, vec![Tag::new("a", "1"), Tag::new("b", "2")]);
    }
}
