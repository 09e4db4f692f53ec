use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{DraftFilters, DraftPatch, DraftPost, DraftSort, NewDraft};
use crate::error::{DomainError, StoreError};
use crate::ports::DraftRepository;

use super::Actor;

/// Command/query service for draft (planning) posts.
pub struct DraftService {
    repo: Arc<dyn DraftRepository>,
}

impl DraftService {
    pub fn new(repo: Arc<dyn DraftRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        sort: DraftSort,
        filters: &DraftFilters,
    ) -> Result<Vec<DraftPost>, StoreError> {
        self.repo.list(sort, filters).await
    }

    /// Not-found is a valid outcome, not an error.
    pub async fn get(&self, id: Uuid) -> Result<Option<DraftPost>, StoreError> {
        self.repo.find_by_id(id).await
    }

    /// Create a draft owned by the actor. Fails before touching the store
    /// when no actor is present.
    pub async fn create(
        &self,
        actor: Option<&Actor>,
        input: NewDraft,
    ) -> Result<DraftPost, DomainError> {
        let actor = actor.ok_or(DomainError::Unauthenticated(
            "creating a draft post requires a signed-in user",
        ))?;
        input.validate()?;

        let draft = DraftPost::new(actor.user_id, input);
        Ok(self.repo.insert(draft).await?)
    }

    /// Partial update; only supplied fields change. `updated_at` is
    /// assigned explicitly rather than left to the store default.
    pub async fn update(
        &self,
        actor: Option<&Actor>,
        id: Uuid,
        patch: DraftPatch,
    ) -> Result<DraftPost, DomainError> {
        actor.ok_or(DomainError::Unauthenticated(
            "updating a draft post requires a signed-in user",
        ))?;

        let mut draft = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "draft post",
                id,
            })?;
        draft.apply(patch);
        if draft.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        Ok(self.repo.update(draft).await?)
    }

    pub async fn delete(&self, actor: Option<&Actor>, id: Uuid) -> Result<(), DomainError> {
        actor.ok_or(DomainError::Unauthenticated(
            "deleting a draft post requires a signed-in user",
        ))?;
        Ok(self.repo.delete(id).await?)
    }

    /// Distinct non-empty categories, sorted.
    pub async fn categories(&self) -> Result<Vec<String>, StoreError> {
        self.repo.categories().await
    }
}
