use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(string_uniq(Post::Slug))
                    .col(string(Post::Title))
                    .col(string(Post::Excerpt))
                    .col(text(Post::Content))
                    .col(string_null(Post::CoverImage))
                    .col(string(Post::Category))
                    .col(string(Post::Tags).default(""))
                    .col(boolean(Post::Published).default(false))
                    .col(boolean(Post::Featured).default(false))
                    .col(integer(Post::ViewCount).default(0))
                    .col(integer(Post::ReadingTime).default(1))
                    .col(
                        timestamp_with_time_zone(Post::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Post::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Post::PublishedAt))
                    .to_owned(),
            )
            .await?;

        // Public listing filters on published + category, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_post_published_category")
                    .table(Post::Table)
                    .col(Post::Published)
                    .col(Post::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_post_published_category")
                    .table(Post::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    Slug,
    Title,
    Excerpt,
    Content,
    CoverImage,
    Category,
    Tags,
    Published,
    Featured,
    ViewCount,
    ReadingTime,
    CreatedAt,
    UpdatedAt,
    PublishedAt,
}
