use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyTask::Table)
                    .if_not_exists()
                    .col(pk_auto(DailyTask::Id))
                    .col(string_uniq(DailyTask::Slug))
                    .col(string(DailyTask::Title))
                    .col(string(DailyTask::Description))
                    .col(string(DailyTask::ActionType))
                    .col(integer(DailyTask::Target).default(1))
                    .col(integer(DailyTask::XpReward).default(0))
                    .col(boolean(DailyTask::Active).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyTask::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DailyTask {
    Table,
    Id,
    Slug,
    Title,
    Description,
    ActionType,
    Target,
    XpReward,
    Active,
}
