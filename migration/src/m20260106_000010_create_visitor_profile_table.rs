use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VisitorProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(VisitorProfile::Id))
                    .col(string_uniq(VisitorProfile::VisitorId))
                    .col(string(VisitorProfile::DisplayName))
                    .col(integer(VisitorProfile::Xp).default(0))
                    .col(integer(VisitorProfile::Level).default(1))
                    .col(integer(VisitorProfile::PostsRead).default(0))
                    .col(integer(VisitorProfile::CommentsCount).default(0))
                    .col(integer(VisitorProfile::ReactionsCount).default(0))
                    .col(integer(VisitorProfile::VotesCount).default(0))
                    .col(
                        timestamp_with_time_zone(VisitorProfile::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(VisitorProfile::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VisitorProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VisitorProfile {
    Table,
    Id,
    VisitorId,
    DisplayName,
    Xp,
    Level,
    PostsRead,
    CommentsCount,
    ReactionsCount,
    VotesCount,
    CreatedAt,
    UpdatedAt,
}
