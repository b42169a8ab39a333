use sea_orm::entity::prelude::*;

/// Fixed-window request counter for one (identifier, action) pair.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rate_limit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "window")]
    pub identifier: String,
    #[sea_orm(unique_key = "window")]
    pub action: String,
    pub count: i32,
    pub reset_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
