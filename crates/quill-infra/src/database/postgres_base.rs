use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, PrimaryKeyTrait};

use quill_core::error::StoreError;
use quill_core::ports::BaseRepository;

/// Generic Postgres repository implementation.
///
/// The pool is shared behind an `Arc`; `DatabaseConnection` itself is not
/// clonable under every feature combination.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Distinguish unique-constraint failures from other query errors.
pub(crate) fn map_write_err(e: DbErr) -> StoreError {
    let msg = e.to_string();
    if msg.contains("duplicate") || msg.contains("unique") {
        StoreError::Constraint(msg)
    } else {
        StoreError::Query(msg)
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, StoreError> {
        let result = E::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, entity: T) -> Result<T, StoreError> {
        let active_model: E::ActiveModel = entity.into();
        let model = E::insert(active_model)
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_write_err)?;

        Ok(model.into())
    }

    async fn update(&self, entity: T) -> Result<T, StoreError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => StoreError::NotFound,
            other => map_write_err(other),
        })?;

        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<(), StoreError> {
        let result = E::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
