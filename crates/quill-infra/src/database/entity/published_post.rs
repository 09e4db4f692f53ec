//! Published post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "published_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub title_es: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt_es: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_es: Option<String>,
    pub category_es: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub featured_image_url: Option<String>,
    pub author_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub author_bio: Option<String>,
    pub published_at: DateTimeWithTimeZone,
    pub view_count: i64,
    pub is_featured: bool,
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

/// Conversion from SeaORM Model to the domain PublishedPost.
impl From<Model> for domain::PublishedPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            slug: model.slug,
            title: model.title,
            excerpt: model.excerpt,
            content: model.content,
            title_es: model.title_es,
            excerpt_es: model.excerpt_es,
            content_es: model.content_es,
            category_es: model.category_es,
            category: model.category,
            tags: model.tags,
            featured_image_url: model.featured_image_url,
            author_name: model.author_name,
            author_bio: model.author_bio,
            published_at: model.published_at.into(),
            view_count: model.view_count,
            is_featured: model.is_featured,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from the domain PublishedPost to a SeaORM ActiveModel.
impl From<domain::PublishedPost> for ActiveModel {
    fn from(post: domain::PublishedPost) -> Self {
        Self {
            id: Set(post.id),
            user_id: Set(post.user_id),
            slug: Set(post.slug),
            title: Set(post.title),
            excerpt: Set(post.excerpt),
            content: Set(post.content),
            title_es: Set(post.title_es),
            excerpt_es: Set(post.excerpt_es),
            content_es: Set(post.content_es),
            category_es: Set(post.category_es),
            category: Set(post.category),
            tags: Set(post.tags),
            featured_image_url: Set(post.featured_image_url),
            author_name: Set(post.author_name),
            author_bio: Set(post.author_bio),
            published_at: Set(post.published_at.into()),
            view_count: Set(post.view_count),
            is_featured: Set(post.is_featured),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
