use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "xp_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub visitor_id: String,
    pub amount: i32,
    pub reason: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::visitor_profile::Entity",
        from = "Column::VisitorId",
        to = "super::visitor_profile::Column::VisitorId",
        on_delete = "Cascade"
    )]
    VisitorProfile,
}

impl Related<super::visitor_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitorProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
