use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000010_create_visitor_profile_table::VisitorProfile,
    m20260106_000013_create_badge_table::Badge,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBadge::Table)
                    .if_not_exists()
                    .col(pk_auto(UserBadge::Id))
                    .col(string(UserBadge::VisitorId))
                    .col(integer(UserBadge::BadgeId))
                    .col(
                        timestamp_with_time_zone(UserBadge::EarnedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_badge_visitor_id")
                            .from(UserBadge::Table, UserBadge::VisitorId)
                            .to(VisitorProfile::Table, VisitorProfile::VisitorId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_badge_badge_id")
                            .from(UserBadge::Table, UserBadge::BadgeId)
                            .to(Badge::Table, Badge::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_badge_unique")
                            .col(UserBadge::VisitorId)
                            .col(UserBadge::BadgeId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBadge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserBadge {
    Table,
    Id,
    VisitorId,
    BadgeId,
    EarnedAt,
}
