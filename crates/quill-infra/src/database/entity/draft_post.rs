//! Draft post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain;

/// Stored rendition of [`domain::Priority`]. Closed string enum at the
/// database boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Priority {
    #[sea_orm(string_value = "High")]
    High,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "Low")]
    Low,
}

/// Stored rendition of [`domain::Status`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "Idea")]
    Idea,
    #[sea_orm(string_value = "Outline")]
    Outline,
    #[sea_orm(string_value = "Draft")]
    Draft,
    #[sea_orm(string_value = "Ready to Publish")]
    ReadyToPublish,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "draft_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub target_publication_date: Option<Date>,
    pub category: String,
    pub priority: Priority,
    pub status: Status,
    pub author: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Priority> for domain::Priority {
    fn from(p: Priority) -> Self {
        match p {
            Priority::High => domain::Priority::High,
            Priority::Medium => domain::Priority::Medium,
            Priority::Low => domain::Priority::Low,
        }
    }
}

impl From<domain::Priority> for Priority {
    fn from(p: domain::Priority) -> Self {
        match p {
            domain::Priority::High => Priority::High,
            domain::Priority::Medium => Priority::Medium,
            domain::Priority::Low => Priority::Low,
        }
    }
}

impl From<Status> for domain::Status {
    fn from(s: Status) -> Self {
        match s {
            Status::Idea => domain::Status::Idea,
            Status::Outline => domain::Status::Outline,
            Status::Draft => domain::Status::Draft,
            Status::ReadyToPublish => domain::Status::ReadyToPublish,
        }
    }
}

impl From<domain::Status> for Status {
    fn from(s: domain::Status) -> Self {
        match s {
            domain::Status::Idea => Status::Idea,
            domain::Status::Outline => Status::Outline,
            domain::Status::Draft => Status::Draft,
            domain::Status::ReadyToPublish => Status::ReadyToPublish,
        }
    }
}

/// Conversion from SeaORM Model to the domain DraftPost.
impl From<Model> for domain::DraftPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            target_publication_date: model.target_publication_date,
            category: model.category,
            priority: model.priority.into(),
            status: model.status.into(),
            author: model.author,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from the domain DraftPost to a SeaORM ActiveModel.
impl From<domain::DraftPost> for ActiveModel {
    fn from(draft: domain::DraftPost) -> Self {
        Self {
            id: Set(draft.id),
            user_id: Set(draft.user_id),
            title: Set(draft.title),
            description: Set(draft.description),
            target_publication_date: Set(draft.target_publication_date),
            category: Set(draft.category),
            priority: Set(draft.priority.into()),
            status: Set(draft.status.into()),
            author: Set(draft.author),
            created_at: Set(draft.created_at.into()),
            updated_at: Set(draft.updated_at.into()),
        }
    }
}
