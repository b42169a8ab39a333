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
                    .table(XpTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(XpTransaction::Id))
                    .col(string(XpTransaction::VisitorId))
                    .col(integer(XpTransaction::Amount))
                    .col(string(XpTransaction::Reason))
                    .col(
                        timestamp_with_time_zone(XpTransaction::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_xp_transaction_visitor_id")
                            .from(XpTransaction::Table, XpTransaction::VisitorId)
                            .to(VisitorProfile::Table, VisitorProfile::VisitorId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Period leaderboards aggregate by creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_xp_transaction_created_at")
                    .table(XpTransaction::Table)
                    .col(XpTransaction::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_xp_transaction_created_at")
                    .table(XpTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(XpTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum XpTransaction {
    Table,
    Id,
    VisitorId,
    Amount,
    Reason,
    CreatedAt,
}
