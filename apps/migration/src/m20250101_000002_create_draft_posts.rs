use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DraftPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DraftPosts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DraftPosts::UserId).uuid().not_null())
                    .col(ColumnDef::new(DraftPosts::Title).string().not_null())
                    .col(ColumnDef::new(DraftPosts::Description).text().not_null())
                    .col(ColumnDef::new(DraftPosts::TargetPublicationDate).date())
                    .col(ColumnDef::new(DraftPosts::Category).string().not_null())
                    // Closed string enums, validated at the domain boundary
                    .col(ColumnDef::new(DraftPosts::Priority).string().not_null())
                    .col(ColumnDef::new(DraftPosts::Status).string().not_null())
                    .col(ColumnDef::new(DraftPosts::Author).string().not_null())
                    .col(
                        ColumnDef::new(DraftPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DraftPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_draft_posts_user_id")
                            .from(DraftPosts::Table, DraftPosts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_draft_posts_status")
                    .table(DraftPosts::Table)
                    .col(DraftPosts::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DraftPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DraftPosts {
    Table,
    Id,
    UserId,
    Title,
    Description,
    TargetPublicationDate,
    Category,
    Priority,
    Status,
    Author,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
