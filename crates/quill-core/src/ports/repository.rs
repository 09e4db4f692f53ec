use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DraftFilters, DraftPost, DraftSort, PublishedFilters, PublishedPost, User};
use crate::error::StoreError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, StoreError>;

    /// Insert a new entity. Duplicate keys surface as
    /// [`StoreError::Constraint`].
    async fn insert(&self, entity: T) -> Result<T, StoreError>;

    /// Persist changes to an existing entity.
    async fn update(&self, entity: T) -> Result<T, StoreError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), StoreError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// Draft-post repository.
#[async_trait]
pub trait DraftRepository: BaseRepository<DraftPost, Uuid> {
    /// List drafts in the requested order, narrowed by `filters`.
    /// No matches is an empty vec, never an error.
    async fn list(
        &self,
        sort: DraftSort,
        filters: &DraftFilters,
    ) -> Result<Vec<DraftPost>, StoreError>;

    /// Distinct non-empty categories in use, sorted.
    async fn categories(&self) -> Result<Vec<String>, StoreError>;
}

/// Published-post repository. All listings are ordered by
/// `published_at` descending.
#[async_trait]
pub trait PublishedRepository: BaseRepository<PublishedPost, Uuid> {
    async fn list(&self, filters: &PublishedFilters) -> Result<Vec<PublishedPost>, StoreError>;

    /// Look up the unique post with this slug. Absence is `None`.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PublishedPost>, StoreError>;

    /// Most recent featured posts, truncated to `limit`.
    async fn featured(&self, limit: u64) -> Result<Vec<PublishedPost>, StoreError>;

    /// Most recent posts, truncated to `limit`.
    async fn latest(&self, limit: u64) -> Result<Vec<PublishedPost>, StoreError>;

    /// Most recent posts sharing `category`, excluding `exclude_id`,
    /// truncated to `limit`.
    async fn related(
        &self,
        category: &str,
        exclude_id: Uuid,
        limit: u64,
    ) -> Result<Vec<PublishedPost>, StoreError>;

    /// Atomically bump the view counter of the post with this slug.
    async fn increment_views(&self, slug: &str) -> Result<(), StoreError>;

    /// Distinct non-empty categories in use, sorted.
    async fn categories(&self) -> Result<Vec<String>, StoreError>;

    /// Distinct tags across all posts, sorted.
    async fn tags(&self) -> Result<Vec<String>, StoreError>;
}
