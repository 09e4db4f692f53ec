//! Postgres repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, extension::postgres::PgExpr};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Statement,
};
use uuid::Uuid;

use quill_core::domain::{
    DraftFilters, DraftPost, DraftSort, PublishedFilters, PublishedPost, SortField, SortOrder,
    User,
};
use quill_core::error::StoreError;
use quill_core::ports::{DraftRepository, PublishedRepository, UserRepository};

use super::entity::draft_post::{self, Entity as DraftEntity};
use super::entity::published_post::{self, Entity as PublishedEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// Postgres user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// Postgres draft-post repository.
pub type PostgresDraftRepository = PostgresBaseRepository<DraftEntity>;

/// Postgres published-post repository.
pub type PostgresPublishedRepository = PostgresBaseRepository<PublishedEntity>;

fn query_err(e: sea_orm::DbErr) -> StoreError {
    StoreError::Query(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl DraftRepository for PostgresDraftRepository {
    async fn list(
        &self,
        sort: DraftSort,
        filters: &DraftFilters,
    ) -> Result<Vec<DraftPost>, StoreError> {
        let mut query = DraftEntity::find();

        if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            query = query.filter(
                Condition::any()
                    .add(Expr::col(draft_post::Column::Title).ilike(pattern.clone()))
                    .add(Expr::col(draft_post::Column::Description).ilike(pattern)),
            );
        }
        if let Some(status) = filters.status {
            query = query.filter(draft_post::Column::Status.eq(draft_post::Status::from(status)));
        }
        if let Some(priority) = filters.priority {
            query = query
                .filter(draft_post::Column::Priority.eq(draft_post::Priority::from(priority)));
        }
        if let Some(category) = filters.category.as_deref().filter(|c| !c.is_empty()) {
            query = query.filter(draft_post::Column::Category.eq(category));
        }

        let column = match sort.field {
            SortField::CreatedAt => draft_post::Column::CreatedAt,
            SortField::UpdatedAt => draft_post::Column::UpdatedAt,
            SortField::Title => draft_post::Column::Title,
            SortField::TargetPublicationDate => draft_post::Column::TargetPublicationDate,
            SortField::Priority => draft_post::Column::Priority,
            SortField::Status => draft_post::Column::Status,
        };
        let query = match sort.order {
            SortOrder::Asc => query.order_by_asc(column),
            SortOrder::Desc => query.order_by_desc(column),
        };

        let rows = query.all(&*self.db).await.map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        DraftEntity::find()
            .select_only()
            .column(draft_post::Column::Category)
            .distinct()
            .filter(draft_post::Column::Category.ne(""))
            .order_by_asc(draft_post::Column::Category)
            .into_tuple::<String>()
            .all(&*self.db)
            .await
            .map_err(query_err)
    }
}

#[async_trait]
impl PublishedRepository for PostgresPublishedRepository {
    async fn list(&self, filters: &PublishedFilters) -> Result<Vec<PublishedPost>, StoreError> {
        let mut query =
            PublishedEntity::find().order_by_desc(published_post::Column::PublishedAt);

        if let Some(category) = filters.category.as_deref() {
            query = query.filter(published_post::Column::Category.eq(category));
        }
        if let Some(tag) = filters.tag.as_deref() {
            query = query.filter(Expr::cust_with_values("? = ANY(tags)", [tag.to_owned()]));
        }
        if let Some(limit) = filters.limit {
            query = query.limit(limit);
        }
        if let Some(offset) = filters.offset {
            query = query.offset(offset);
        }

        let rows = query.all(&*self.db).await.map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PublishedPost>, StoreError> {
        let result = PublishedEntity::find()
            .filter(published_post::Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn featured(&self, limit: u64) -> Result<Vec<PublishedPost>, StoreError> {
        let rows = PublishedEntity::find()
            .filter(published_post::Column::IsFeatured.eq(true))
            .order_by_desc(published_post::Column::PublishedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn latest(&self, limit: u64) -> Result<Vec<PublishedPost>, StoreError> {
        let rows = PublishedEntity::find()
            .order_by_desc(published_post::Column::PublishedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn related(
        &self,
        category: &str,
        exclude_id: Uuid,
        limit: u64,
    ) -> Result<Vec<PublishedPost>, StoreError> {
        let rows = PublishedEntity::find()
            .filter(published_post::Column::Category.eq(category))
            .filter(published_post::Column::Id.ne(exclude_id))
            .order_by_desc(published_post::Column::PublishedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(query_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn increment_views(&self, slug: &str) -> Result<(), StoreError> {
        // Single atomic statement; the counter can only grow.
        let result = PublishedEntity::update_many()
            .col_expr(
                published_post::Column::ViewCount,
                Expr::col(published_post::Column::ViewCount).add(1),
            )
            .filter(published_post::Column::Slug.eq(slug))
            .exec(&*self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        PublishedEntity::find()
            .select_only()
            .column(published_post::Column::Category)
            .distinct()
            .filter(published_post::Column::Category.ne(""))
            .order_by_asc(published_post::Column::Category)
            .into_tuple::<String>()
            .all(&*self.db)
            .await
            .map_err(query_err)
    }

    async fn tags(&self) -> Result<Vec<String>, StoreError> {
        let backend = self.db.get_database_backend();
        let rows = self
            .db
            .query_all(Statement::from_string(
                backend,
                "SELECT DISTINCT unnest(tags) AS tag FROM published_posts ORDER BY tag",
            ))
            .await
            .map_err(query_err)?;

        rows.into_iter()
            .map(|row| row.try_get::<String>("", "tag"))
            .collect::<Result<Vec<_>, _>>()
            .map_err(query_err)
    }
}
