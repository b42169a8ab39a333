use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_post_table::Post;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reaction::Table)
                    .if_not_exists()
                    .col(pk_auto(Reaction::Id))
                    .col(integer(Reaction::PostId))
                    .col(string(Reaction::IpHash))
                    .col(string(Reaction::ReactionType))
                    .col(
                        timestamp_with_time_zone(Reaction::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reaction_post_id")
                            .from(Reaction::Table, Reaction::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_reaction_unique")
                            .col(Reaction::PostId)
                            .col(Reaction::IpHash)
                            .col(Reaction::ReactionType),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reaction {
    Table,
    Id,
    PostId,
    IpHash,
    ReactionType,
    CreatedAt,
}
