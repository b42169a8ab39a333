use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000005_create_poll_table::Poll, m20260105_000006_create_poll_option_table::PollOption,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollVote::Table)
                    .if_not_exists()
                    .col(pk_auto(PollVote::Id))
                    .col(integer(PollVote::PollId))
                    .col(integer(PollVote::OptionId))
                    .col(string(PollVote::IpHash))
                    .col(
                        timestamp_with_time_zone(PollVote::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_vote_poll_id")
                            .from(PollVote::Table, PollVote::PollId)
                            .to(Poll::Table, Poll::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_vote_option_id")
                            .from(PollVote::Table, PollVote::OptionId)
                            .to(PollOption::Table, PollOption::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_poll_vote_unique")
                            .col(PollVote::PollId)
                            .col(PollVote::IpHash),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollVote {
    Table,
    Id,
    PollId,
    OptionId,
    IpHash,
    CreatedAt,
}
