use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeaderboardCache::Table)
                    .if_not_exists()
                    .col(pk_auto(LeaderboardCache::Id))
                    .col(string_uniq(LeaderboardCache::Period))
                    .col(text(LeaderboardCache::Payload))
                    .col(timestamp_with_time_zone(LeaderboardCache::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaderboardCache::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeaderboardCache {
    Table,
    Id,
    Period,
    Payload,
    UpdatedAt,
}
