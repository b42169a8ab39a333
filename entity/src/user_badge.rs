use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_badge")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "earned")]
    pub visitor_id: String,
    #[sea_orm(unique_key = "earned")]
    pub badge_id: i32,
    pub earned_at: DateTimeUtc,
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
    #[sea_orm(
        belongs_to = "super::badge::Entity",
        from = "Column::BadgeId",
        to = "super::badge::Column::Id",
        on_delete = "Cascade"
    )]
    Badge,
}

impl Related<super::visitor_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitorProfile.def()
    }
}

impl Related<super::badge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Badge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
