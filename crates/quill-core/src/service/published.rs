use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{NewPublishedPost, PublishedFilters, PublishedPatch, PublishedPost};
use crate::error::{DomainError, StoreError};
use crate::ports::PublishedRepository;

use super::Actor;

/// Command/query service for public blog posts.
pub struct PublishedService {
    repo: Arc<dyn PublishedRepository>,
}

impl PublishedService {
    pub fn new(repo: Arc<dyn PublishedRepository>) -> Self {
        Self { repo }
    }

    /// List published posts, `published_at` descending.
    pub async fn list(&self, filters: &PublishedFilters) -> Result<Vec<PublishedPost>, DomainError> {
        filters.validate()?;
        Ok(self.repo.list(filters).await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<PublishedPost>, StoreError> {
        self.repo.find_by_slug(slug).await
    }

    pub async fn featured(&self, limit: u64) -> Result<Vec<PublishedPost>, StoreError> {
        self.repo.featured(limit).await
    }

    pub async fn latest(&self, limit: u64) -> Result<Vec<PublishedPost>, StoreError> {
        self.repo.latest(limit).await
    }

    /// Posts sharing `category`, never including `exclude_id`.
    pub async fn related(
        &self,
        category: &str,
        exclude_id: Uuid,
        limit: u64,
    ) -> Result<Vec<PublishedPost>, StoreError> {
        self.repo.related(category, exclude_id, limit).await
    }

    /// Best-effort view tracking. Failures are logged and swallowed;
    /// view counting is not load-bearing for content delivery.
    pub async fn record_view(&self, slug: &str) {
        if let Err(e) = self.repo.increment_views(slug).await {
            tracing::warn!(slug, error = %e, "failed to record view");
        }
    }

    pub async fn categories(&self) -> Result<Vec<String>, StoreError> {
        self.repo.categories().await
    }

    pub async fn tags(&self) -> Result<Vec<String>, StoreError> {
        self.repo.tags().await
    }

    pub async fn create(
        &self,
        actor: Option<&Actor>,
        input: NewPublishedPost,
    ) -> Result<PublishedPost, DomainError> {
        let actor = actor.ok_or(DomainError::Unauthenticated(
            "publishing a post requires a signed-in user",
        ))?;
        input.validate()?;

        let post = PublishedPost::new(actor.user_id, input);
        Ok(self.repo.insert(post).await?)
    }

    pub async fn update(
        &self,
        actor: Option<&Actor>,
        id: Uuid,
        patch: PublishedPatch,
    ) -> Result<PublishedPost, DomainError> {
        actor.ok_or(DomainError::Unauthenticated(
            "updating a published post requires a signed-in user",
        ))?;

        let mut post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "published post",
                id,
            })?;
        post.apply(patch);
        if post.slug.trim().is_empty() {
            return Err(DomainError::Validation("slug must not be empty".into()));
        }
        Ok(self.repo.update(post).await?)
    }

    pub async fn delete(&self, actor: Option<&Actor>, id: Uuid) -> Result<(), DomainError> {
        actor.ok_or(DomainError::Unauthenticated(
            "deleting a published post requires a signed-in user",
        ))?;
        Ok(self.repo.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    use super::*;
    use crate::ports::BaseRepository;

    /// Minimal store double; ordering and slug uniqueness mirror the
    /// real adapters.
    #[derive(Default)]
    struct MemPublished {
        rows: Mutex<Vec<PublishedPost>>,
    }

    impl MemPublished {
        fn sorted(&self) -> Vec<PublishedPost> {
            let mut rows = self.rows.lock().unwrap().clone();
            rows.sort_by(|a, b| b.published_at.cmp(&a.published_at));
            rows
        }
    }

    #[async_trait]
    impl BaseRepository<PublishedPost, Uuid> for MemPublished {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<PublishedPost>, StoreError> {
            Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }

        async fn insert(&self, entity: PublishedPost) -> Result<PublishedPost, StoreError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|p| p.slug == entity.slug) {
                return Err(StoreError::Constraint(format!(
                    "duplicate slug: {}",
                    entity.slug
                )));
            }
            rows.push(entity.clone());
            Ok(entity)
        }

        async fn update(&self, entity: PublishedPost) -> Result<PublishedPost, StoreError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|p| p.slug == entity.slug && p.id != entity.id) {
                return Err(StoreError::Constraint(format!(
                    "duplicate slug: {}",
                    entity.slug
                )));
            }
            let row = rows
                .iter_mut()
                .find(|p| p.id == entity.id)
                .ok_or(StoreError::NotFound)?;
            *row = entity.clone();
            Ok(entity)
        }

        async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
            self.rows.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }
    }

    #[async_trait]
    impl PublishedRepository for MemPublished {
        async fn list(
            &self,
            filters: &PublishedFilters,
        ) -> Result<Vec<PublishedPost>, StoreError> {
            let mut rows = self.sorted();
            if let Some(category) = filters.category.as_deref() {
                rows.retain(|p| p.category == category);
            }
            if let Some(tag) = filters.tag.as_deref() {
                rows.retain(|p| p.tags.iter().any(|t| t == tag));
            }
            let offset = filters.offset.unwrap_or(0) as usize;
            let rows: Vec<_> = rows.into_iter().skip(offset).collect();
            Ok(match filters.limit {
                Some(limit) => rows.into_iter().take(limit as usize).collect(),
                None => rows,
            })
        }

        async fn find_by_slug(&self, slug: &str) -> Result<Option<PublishedPost>, StoreError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.slug == slug)
                .cloned())
        }

        async fn featured(&self, limit: u64) -> Result<Vec<PublishedPost>, StoreError> {
            Ok(self
                .sorted()
                .into_iter()
                .filter(|p| p.is_featured)
                .take(limit as usize)
                .collect())
        }

        async fn latest(&self, limit: u64) -> Result<Vec<PublishedPost>, StoreError> {
            Ok(self.sorted().into_iter().take(limit as usize).collect())
        }

        async fn related(
            &self,
            category: &str,
            exclude_id: Uuid,
            limit: u64,
        ) -> Result<Vec<PublishedPost>, StoreError> {
            Ok(self
                .sorted()
                .into_iter()
                .filter(|p| p.category == category && p.id != exclude_id)
                .take(limit as usize)
                .collect())
        }

        async fn increment_views(&self, slug: &str) -> Result<(), StoreError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|p| p.slug == slug) {
                Some(post) => {
                    post.view_count += 1;
                    Ok(())
                }
                None => Err(StoreError::NotFound),
            }
        }

        async fn categories(&self) -> Result<Vec<String>, StoreError> {
            let mut cats: Vec<String> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .map(|p| p.category.clone())
                .filter(|c| !c.is_empty())
                .collect();
            cats.sort();
            cats.dedup();
            Ok(cats)
        }

        async fn tags(&self) -> Result<Vec<String>, StoreError> {
            let mut tags: Vec<String> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .flat_map(|p| p.tags.clone())
                .collect();
            tags.sort();
            tags.dedup();
            Ok(tags)
        }
    }

    fn input(slug: &str, category: &str) -> NewPublishedPost {
        NewPublishedPost {
            slug: slug.to_string(),
            title: slug.to_string(),
            excerpt: String::new(),
            content: "words".to_string(),
            title_es: None,
            excerpt_es: None,
            content_es: None,
            category_es: None,
            category: category.to_string(),
            tags: vec![],
            featured_image_url: None,
            author_name: String::new(),
            author_bio: None,
            published_at: None,
            is_featured: false,
        }
    }

    fn actor() -> Actor {
        Actor {
            user_id: Uuid::new_v4(),
        }
    }

    #[tokio::test]
    async fn related_excludes_the_current_post() {
        let service = PublishedService::new(Arc::new(MemPublished::default()));
        let actor = actor();
        let p1 = service.create(Some(&actor), input("one", "AI")).await.unwrap();
        let p2 = service.create(Some(&actor), input("two", "AI")).await.unwrap();
        let _p3 = service.create(Some(&actor), input("three", "Web")).await.unwrap();

        let related = service.related("AI", p1.id, 3).await.unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, p2.id);
    }

    #[tokio::test]
    async fn record_view_swallows_store_failures() {
        let service = PublishedService::new(Arc::new(MemPublished::default()));
        // unknown slug: the underlying increment fails, record_view must not panic
        service.record_view("missing").await;
    }

    #[tokio::test]
    async fn views_accumulate_one_per_call() {
        let repo = Arc::new(MemPublished::default());
        let service = PublishedService::new(repo.clone());
        let post = service.create(Some(&actor()), input("a", "AI")).await.unwrap();
        assert_eq!(post.view_count, 0);

        for _ in 0..3 {
            service.record_view("a").await;
        }
        let post = service.get_by_slug("a").await.unwrap().unwrap();
        assert_eq!(post.view_count, 3);
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_constraint_error() {
        let service = PublishedService::new(Arc::new(MemPublished::default()));
        let actor = actor();
        service.create(Some(&actor), input("a", "AI")).await.unwrap();
        let err = service.create(Some(&actor), input("a", "Web")).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Store(StoreError::Constraint(_))
        ));
    }

    #[tokio::test]
    async fn create_without_actor_is_rejected() {
        let service = PublishedService::new(Arc::new(MemPublished::default()));
        let err = service.create(None, input("a", "AI")).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn list_is_ordered_most_recent_first() {
        let repo = Arc::new(MemPublished::default());
        let service = PublishedService::new(repo.clone());
        let actor = actor();
        for (slug, days_ago) in [("old", 10), ("new", 1), ("mid", 5)] {
            let mut post = input(slug, "AI");
            post.published_at = Some(Utc::now() - Duration::days(days_ago));
            service.create(Some(&actor), post).await.unwrap();
        }

        let posts = service.list(&PublishedFilters::default()).await.unwrap();
        for pair in posts.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
        assert_eq!(posts[0].slug, "new");
    }

    #[tokio::test]
    async fn offset_without_limit_is_a_validation_error() {
        let service = PublishedService::new(Arc::new(MemPublished::default()));
        let err = service
            .list(&PublishedFilters {
                offset: Some(3),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_slug_is_none() {
        let service = PublishedService::new(Arc::new(MemPublished::default()));
        assert!(service.get_by_slug("nope").await.unwrap().is_none());
    }
}
