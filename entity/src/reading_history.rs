use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reading_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "read")]
    pub visitor_id: String,
    #[sea_orm(unique_key = "read")]
    pub post_id: i32,
    /// Highest scroll progress seen, 0-100.
    pub progress: i32,
    pub completed: bool,
    pub read_at: DateTimeUtc,
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
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::visitor_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitorProfile.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
