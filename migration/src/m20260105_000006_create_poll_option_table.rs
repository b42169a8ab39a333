use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000005_create_poll_table::Poll;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollOption::Table)
                    .if_not_exists()
                    .col(pk_auto(PollOption::Id))
                    .col(integer(PollOption::PollId))
                    .col(string(PollOption::Text))
                    .col(integer(PollOption::Position).default(0))
                    .col(integer(PollOption::VoteCount).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_option_poll_id")
                            .from(PollOption::Table, PollOption::PollId)
                            .to(Poll::Table, Poll::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollOption {
    Table,
    Id,
    PollId,
    Text,
    Position,
    VoteCount,
}
