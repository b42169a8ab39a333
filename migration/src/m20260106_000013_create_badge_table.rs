use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Badge::Table)
                    .if_not_exists()
                    .col(pk_auto(Badge::Id))
                    .col(string_uniq(Badge::Slug))
                    .col(string(Badge::Name))
                    .col(string(Badge::Description))
                    .col(string(Badge::Icon))
                    .col(string(Badge::RequirementType))
                    .col(integer(Badge::RequirementValue))
                    .col(integer(Badge::XpReward).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Badge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Badge {
    Table,
    Id,
    Slug,
    Name,
    Description,
    Icon,
    RequirementType,
    RequirementValue,
    XpReward,
}
