use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PublishedPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PublishedPosts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PublishedPosts::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(PublishedPosts::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PublishedPosts::Title).string().not_null())
                    .col(ColumnDef::new(PublishedPosts::Excerpt).text().not_null())
                    .col(ColumnDef::new(PublishedPosts::Content).text().not_null())
                    .col(ColumnDef::new(PublishedPosts::TitleEs).string())
                    .col(ColumnDef::new(PublishedPosts::ExcerptEs).text())
                    .col(ColumnDef::new(PublishedPosts::ContentEs).text())
                    .col(ColumnDef::new(PublishedPosts::CategoryEs).string())
                    .col(ColumnDef::new(PublishedPosts::Category).string().not_null())
                    .col(
                        ColumnDef::new(PublishedPosts::Tags)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PublishedPosts::FeaturedImageUrl).string())
                    .col(
                        ColumnDef::new(PublishedPosts::AuthorName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PublishedPosts::AuthorBio).text())
                    .col(
                        ColumnDef::new(PublishedPosts::PublishedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PublishedPosts::ViewCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PublishedPosts::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PublishedPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PublishedPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_published_posts_user_id")
                            .from(PublishedPosts::Table, PublishedPosts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listings are always ordered by published_at descending
        manager
            .create_index(
                Index::create()
                    .name("idx_published_posts_published_at")
                    .table(PublishedPosts::Table)
                    .col(PublishedPosts::PublishedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_published_posts_category")
                    .table(PublishedPosts::Table)
                    .col(PublishedPosts::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PublishedPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PublishedPosts {
    Table,
    Id,
    UserId,
    Slug,
    Title,
    Excerpt,
    Content,
    TitleEs,
    ExcerptEs,
    ContentEs,
    CategoryEs,
    Category,
    Tags,
    FeaturedImageUrl,
    AuthorName,
    AuthorBio,
    PublishedAt,
    ViewCount,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
