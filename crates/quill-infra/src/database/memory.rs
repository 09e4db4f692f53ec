//! In-memory repositories - used as fallback when no content store is
//! configured. Data is lost on process restart.
//!
//! These mirror the Postgres adapters' observable behavior: slug
//! uniqueness, `published_at` descending order, and distinct sorted
//! category/tag listings.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{
    DraftFilters, DraftPost, DraftSort, PublishedFilters, PublishedPost, SortField, SortOrder,
    User, apply_filters,
};
use quill_core::error::StoreError;
use quill_core::ports::{
    BaseRepository, DraftRepository, PublishedRepository, UserRepository,
};

/// In-memory user repository.
pub struct InMemoryUserRepository {
    rows: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut rows = self.rows.write().await;
        if rows.values().any(|u| u.email == user.email) {
            return Err(StoreError::Constraint(format!(
                "duplicate email: {}",
                user.email
            )));
        }
        rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, StoreError> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&user.id) {
            return Err(StoreError::NotFound);
        }
        rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

/// In-memory draft-post repository.
pub struct InMemoryDraftRepository {
    rows: RwLock<HashMap<Uuid, DraftPost>>,
}

impl InMemoryDraftRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryDraftRepository {
    fn default() -> Self {
        Self::new()
    }
}

// Sorts string-typed columns the way the Postgres adapter does.
fn compare_drafts(a: &DraftPost, b: &DraftPost, field: SortField) -> Ordering {
    match field {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortField::Title => a.title.cmp(&b.title),
        SortField::TargetPublicationDate => {
            a.target_publication_date.cmp(&b.target_publication_date)
        }
        SortField::Priority => a.priority.to_string().cmp(&b.priority.to_string()),
        SortField::Status => a.status.to_string().cmp(&b.status.to_string()),
    }
}

#[async_trait]
impl BaseRepository<DraftPost, Uuid> for InMemoryDraftRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<DraftPost>, StoreError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert(&self, draft: DraftPost) -> Result<DraftPost, StoreError> {
        self.rows.write().await.insert(draft.id, draft.clone());
        Ok(draft)
    }

    async fn update(&self, draft: DraftPost) -> Result<DraftPost, StoreError> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&draft.id) {
            return Err(StoreError::NotFound);
        }
        rows.insert(draft.id, draft.clone());
        Ok(draft)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl DraftRepository for InMemoryDraftRepository {
    async fn list(
        &self,
        sort: DraftSort,
        filters: &DraftFilters,
    ) -> Result<Vec<DraftPost>, StoreError> {
        let rows: Vec<DraftPost> = self.rows.read().await.values().cloned().collect();
        let mut drafts = apply_filters(&rows, filters);
        drafts.sort_by(|a, b| {
            let ord = compare_drafts(a, b, sort.field);
            match sort.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        Ok(drafts)
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        let rows = self.rows.read().await;
        let mut categories: Vec<String> = rows
            .values()
            .map(|d| d.category.clone())
            .filter(|c| !c.is_empty())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}

/// In-memory published-post repository.
pub struct InMemoryPublishedRepository {
    rows: RwLock<HashMap<Uuid, PublishedPost>>,
}

impl InMemoryPublishedRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    async fn ordered(&self) -> Vec<PublishedPost> {
        let mut rows: Vec<PublishedPost> = self.rows.read().await.values().cloned().collect();
        rows.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        rows
    }
}

impl Default for InMemoryPublishedRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<PublishedPost, Uuid> for InMemoryPublishedRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PublishedPost>, StoreError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert(&self, post: PublishedPost) -> Result<PublishedPost, StoreError> {
        let mut rows = self.rows.write().await;
        if rows.values().any(|p| p.slug == post.slug) {
            return Err(StoreError::Constraint(format!(
                "duplicate slug: {}",
                post.slug
            )));
        }
        rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: PublishedPost) -> Result<PublishedPost, StoreError> {
        let mut rows = self.rows.write().await;
        if rows.values().any(|p| p.slug == post.slug && p.id != post.id) {
            return Err(StoreError::Constraint(format!(
                "duplicate slug: {}",
                post.slug
            )));
        }
        if !rows.contains_key(&post.id) {
            return Err(StoreError::NotFound);
        }
        rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl PublishedRepository for InMemoryPublishedRepository {
    async fn list(&self, filters: &PublishedFilters) -> Result<Vec<PublishedPost>, StoreError> {
        let mut rows = self.ordered().await;
        if let Some(category) = filters.category.as_deref() {
            rows.retain(|p| p.category == category);
        }
        if let Some(tag) = filters.tag.as_deref() {
            rows.retain(|p| p.tags.iter().any(|t| t == tag));
        }
        let offset = filters.offset.unwrap_or(0) as usize;
        let rows = rows.into_iter().skip(offset);
        Ok(match filters.limit {
            Some(limit) => rows.take(limit as usize).collect(),
            None => rows.collect(),
        })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PublishedPost>, StoreError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn featured(&self, limit: u64) -> Result<Vec<PublishedPost>, StoreError> {
        Ok(self
            .ordered()
            .await
            .into_iter()
            .filter(|p| p.is_featured)
            .take(limit as usize)
            .collect())
    }

    async fn latest(&self, limit: u64) -> Result<Vec<PublishedPost>, StoreError> {
        Ok(self
            .ordered()
            .await
            .into_iter()
            .take(limit as usize)
            .collect())
    }

    async fn related(
        &self,
        category: &str,
        exclude_id: Uuid,
        limit: u64,
    ) -> Result<Vec<PublishedPost>, StoreError> {
        Ok(self
            .ordered()
            .await
            .into_iter()
            .filter(|p| p.category == category && p.id != exclude_id)
            .take(limit as usize)
            .collect())
    }

    async fn increment_views(&self, slug: &str) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let post = rows
            .values_mut()
            .find(|p| p.slug == slug)
            .ok_or(StoreError::NotFound)?;
        post.view_count += 1;
        Ok(())
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        let rows = self.rows.read().await;
        let mut categories: Vec<String> = rows
            .values()
            .map(|p| p.category.clone())
            .filter(|c| !c.is_empty())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn tags(&self) -> Result<Vec<String>, StoreError> {
        let rows = self.rows.read().await;
        let mut tags: Vec<String> = rows.values().flat_map(|p| p.tags.clone()).collect();
        tags.sort();
        tags.dedup();
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use quill_core::domain::{NewDraft, NewPublishedPost, Priority, Status};

    use super::*;

    fn published(slug: &str, category: &str, tags: &[&str]) -> PublishedPost {
        PublishedPost::new(
            Uuid::new_v4(),
            NewPublishedPost {
                slug: slug.to_string(),
                title: slug.to_string(),
                excerpt: String::new(),
                content: String::new(),
                title_es: None,
                excerpt_es: None,
                content_es: None,
                category_es: None,
                category: category.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                featured_image_url: None,
                author_name: String::new(),
                author_bio: None,
                published_at: None,
                is_featured: false,
            },
        )
    }

    fn draft(title: &str, category: &str) -> DraftPost {
        DraftPost::new(
            Uuid::new_v4(),
            NewDraft {
                title: title.to_string(),
                description: String::new(),
                target_publication_date: None,
                category: category.to_string(),
                priority: Priority::Medium,
                status: Status::Idea,
                author: String::new(),
            },
        )
    }

    #[tokio::test]
    async fn slug_is_unique_across_published_posts() {
        let repo = InMemoryPublishedRepository::new();
        repo.insert(published("intro", "AI", &[])).await.unwrap();

        let err = repo
            .insert(published("intro", "Web", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));

        // exactly one post answers to the slug
        let found = repo.find_by_slug("intro").await.unwrap().unwrap();
        assert_eq!(found.category, "AI");
    }

    #[tokio::test]
    async fn n_increments_raise_view_count_by_exactly_n() {
        let repo = InMemoryPublishedRepository::new();
        repo.insert(published("a", "AI", &[])).await.unwrap();

        let before = repo.find_by_slug("a").await.unwrap().unwrap().view_count;
        for _ in 0..5 {
            repo.increment_views("a").await.unwrap();
        }
        let after = repo.find_by_slug("a").await.unwrap().unwrap().view_count;
        assert_eq!(after, before + 5);
    }

    #[tokio::test]
    async fn increment_of_unknown_slug_is_not_found() {
        let repo = InMemoryPublishedRepository::new();
        assert!(matches!(
            repo.increment_views("ghost").await.unwrap_err(),
            StoreError::NotFound
        ));
    }

    #[tokio::test]
    async fn related_never_returns_the_excluded_post() {
        let repo = InMemoryPublishedRepository::new();
        let p1 = published("one", "AI", &[]);
        let p1_id = p1.id;
        repo.insert(p1).await.unwrap();
        repo.insert(published("two", "AI", &[])).await.unwrap();
        repo.insert(published("three", "Web", &[])).await.unwrap();

        let related = repo.related("AI", p1_id, 3).await.unwrap();
        assert_eq!(related.len(), 1);
        assert!(related.iter().all(|p| p.id != p1_id));
        assert_eq!(related[0].slug, "two");
    }

    #[tokio::test]
    async fn list_is_ordered_by_published_at_descending() {
        let repo = InMemoryPublishedRepository::new();
        for (slug, days_ago) in [("old", 9), ("new", 1), ("mid", 4)] {
            let mut post = published(slug, "AI", &[]);
            post.published_at = Utc::now() - Duration::days(days_ago);
            repo.insert(post).await.unwrap();
        }

        let posts = repo.list(&PublishedFilters::default()).await.unwrap();
        for pair in posts.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }

    #[tokio::test]
    async fn pagination_window_is_offset_to_offset_plus_limit() {
        let repo = InMemoryPublishedRepository::new();
        for i in 0..5 {
            let mut post = published(&format!("p{i}"), "AI", &[]);
            post.published_at = Utc::now() - Duration::days(i);
            repo.insert(post).await.unwrap();
        }

        let page = repo
            .list(&PublishedFilters {
                limit: Some(2),
                offset: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].slug, "p1");
        assert_eq!(page[1].slug, "p2");
    }

    #[tokio::test]
    async fn categories_are_distinct_sorted_and_non_empty() {
        let repo = InMemoryPublishedRepository::new();
        repo.insert(published("a", "Web", &[])).await.unwrap();
        repo.insert(published("b", "AI", &[])).await.unwrap();
        repo.insert(published("c", "AI", &[])).await.unwrap();
        repo.insert(published("d", "", &[])).await.unwrap();

        let categories = repo.categories().await.unwrap();
        assert_eq!(categories, vec!["AI".to_string(), "Web".to_string()]);
    }

    #[tokio::test]
    async fn tags_are_the_distinct_union() {
        let repo = InMemoryPublishedRepository::new();
        repo.insert(published("a", "AI", &["rust", "ml"])).await.unwrap();
        repo.insert(published("b", "AI", &["ml", "llm"])).await.unwrap();

        let tags = repo.tags().await.unwrap();
        assert_eq!(
            tags,
            vec!["llm".to_string(), "ml".to_string(), "rust".to_string()]
        );
    }

    #[tokio::test]
    async fn tag_filter_matches_array_membership() {
        let repo = InMemoryPublishedRepository::new();
        repo.insert(published("a", "AI", &["rust"])).await.unwrap();
        repo.insert(published("b", "AI", &["go"])).await.unwrap();

        let posts = repo
            .list(&PublishedFilters {
                tag: Some("rust".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "a");
    }

    #[tokio::test]
    async fn featured_returns_only_flagged_posts() {
        let repo = InMemoryPublishedRepository::new();
        let mut p = published("star", "AI", &[]);
        p.is_featured = true;
        repo.insert(p).await.unwrap();
        repo.insert(published("plain", "AI", &[])).await.unwrap();

        let featured = repo.featured(3).await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].slug, "star");
    }

    #[tokio::test]
    async fn draft_list_sorts_by_requested_field() {
        let repo = InMemoryDraftRepository::new();
        for title in ["banana", "apple", "cherry"] {
            repo.insert(draft(title, "Dev")).await.unwrap();
        }

        let sort = DraftSort {
            field: SortField::Title,
            order: SortOrder::Asc,
        };
        let drafts = repo.list(sort, &DraftFilters::default()).await.unwrap();
        let titles: Vec<_> = drafts.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "banana", "cherry"]);

        let sort = DraftSort {
            field: SortField::Title,
            order: SortOrder::Desc,
        };
        let drafts = repo.list(sort, &DraftFilters::default()).await.unwrap();
        let titles: Vec<_> = drafts.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["cherry", "banana", "apple"]);
    }

    #[tokio::test]
    async fn draft_categories_exclude_empty_strings() {
        let repo = InMemoryDraftRepository::new();
        repo.insert(draft("a", "Dev")).await.unwrap();
        repo.insert(draft("b", "")).await.unwrap();
        repo.insert(draft("c", "AI")).await.unwrap();

        let categories = repo.categories().await.unwrap();
        assert_eq!(categories, vec!["AI".to_string(), "Dev".to_string()]);
    }

    #[tokio::test]
    async fn user_email_is_unique() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new("a@example.com".into(), "hash".into()))
            .await
            .unwrap();
        let err = repo
            .insert(User::new("a@example.com".into(), "hash2".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));
    }
}
