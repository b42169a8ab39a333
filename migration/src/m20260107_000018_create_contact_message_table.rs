use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactMessage::Id))
                    .col(string(ContactMessage::Name))
                    .col(string(ContactMessage::Email))
                    .col(string(ContactMessage::Subject))
                    .col(text(ContactMessage::Message))
                    .col(string(ContactMessage::IpHash))
                    .col(boolean(ContactMessage::IsRead).default(false))
                    .col(
                        timestamp_with_time_zone(ContactMessage::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ContactMessage {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    IpHash,
    IsRead,
    CreatedAt,
}
