use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_post_table::Post,
    m20260106_000010_create_visitor_profile_table::VisitorProfile,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReadingHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(ReadingHistory::Id))
                    .col(string(ReadingHistory::VisitorId))
                    .col(integer(ReadingHistory::PostId))
                    .col(integer(ReadingHistory::Progress).default(0))
                    .col(boolean(ReadingHistory::Completed).default(false))
                    .col(
                        timestamp_with_time_zone(ReadingHistory::ReadAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reading_history_visitor_id")
                            .from(ReadingHistory::Table, ReadingHistory::VisitorId)
                            .to(VisitorProfile::Table, VisitorProfile::VisitorId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reading_history_post_id")
                            .from(ReadingHistory::Table, ReadingHistory::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_reading_history_unique")
                            .col(ReadingHistory::VisitorId)
                            .col(ReadingHistory::PostId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReadingHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReadingHistory {
    Table,
    Id,
    VisitorId,
    PostId,
    Progress,
    Completed,
    ReadAt,
}
