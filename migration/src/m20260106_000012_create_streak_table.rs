use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000010_create_visitor_profile_table::VisitorProfile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Streak::Table)
                    .if_not_exists()
                    .col(pk_auto(Streak::Id))
                    .col(string_uniq(Streak::VisitorId))
                    .col(integer(Streak::CurrentStreak).default(0))
                    .col(integer(Streak::LongestStreak).default(0))
                    .col(integer(Streak::FreezesAvailable).default(0))
                    .col(date_null(Streak::LastCheckIn))
                    .col(
                        timestamp_with_time_zone(Streak::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_streak_visitor_id")
                            .from(Streak::Table, Streak::VisitorId)
                            .to(VisitorProfile::Table, VisitorProfile::VisitorId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Streak::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Streak {
    Table,
    Id,
    VisitorId,
    CurrentStreak,
    LongestStreak,
    FreezesAvailable,
    LastCheckIn,
    UpdatedAt,
}
