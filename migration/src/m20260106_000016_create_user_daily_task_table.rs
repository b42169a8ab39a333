use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000010_create_visitor_profile_table::VisitorProfile,
    m20260106_000015_create_daily_task_table::DailyTask,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserDailyTask::Table)
                    .if_not_exists()
                    .col(pk_auto(UserDailyTask::Id))
                    .col(string(UserDailyTask::VisitorId))
                    .col(integer(UserDailyTask::TaskId))
                    .col(date(UserDailyTask::TaskDate))
                    .col(integer(UserDailyTask::Progress).default(0))
                    .col(boolean(UserDailyTask::Completed).default(false))
                    .col(boolean(UserDailyTask::Claimed).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_daily_task_visitor_id")
                            .from(UserDailyTask::Table, UserDailyTask::VisitorId)
                            .to(VisitorProfile::Table, VisitorProfile::VisitorId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_daily_task_task_id")
                            .from(UserDailyTask::Table, UserDailyTask::TaskId)
                            .to(DailyTask::Table, DailyTask::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_daily_task_unique")
                            .col(UserDailyTask::VisitorId)
                            .col(UserDailyTask::TaskId)
                            .col(UserDailyTask::TaskDate),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserDailyTask::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserDailyTask {
    Table,
    Id,
    VisitorId,
    TaskId,
    TaskDate,
    Progress,
    Completed,
    Claimed,
}
