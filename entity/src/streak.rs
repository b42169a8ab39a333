use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "streak")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub visitor_id: String,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub freezes_available: i32,
    pub last_check_in: Option<Date>,
    pub updated_at: DateTimeUtc,
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
