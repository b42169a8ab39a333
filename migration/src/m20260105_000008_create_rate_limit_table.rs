use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RateLimit::Table)
                    .if_not_exists()
                    .col(pk_auto(RateLimit::Id))
                    .col(string(RateLimit::Identifier))
                    .col(string(RateLimit::Action))
                    .col(integer(RateLimit::Count).default(0))
                    .col(timestamp_with_time_zone(RateLimit::ResetAt))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_rate_limit_identifier_action")
                            .col(RateLimit::Identifier)
                            .col(RateLimit::Action),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RateLimit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RateLimit {
    Table,
    Id,
    Identifier,
    Action,
    Count,
    ResetAt,
}
