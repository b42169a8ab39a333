use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BannedIp::Table)
                    .if_not_exists()
                    .col(pk_auto(BannedIp::Id))
                    .col(string_uniq(BannedIp::IpHash))
                    .col(string(BannedIp::Reason))
                    .col(timestamp_with_time_zone_null(BannedIp::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(BannedIp::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BannedIp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BannedIp {
    Table,
    Id,
    IpHash,
    Reason,
    ExpiresAt,
    CreatedAt,
}
