use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_daily_task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "daily")]
    pub visitor_id: String,
    #[sea_orm(unique_key = "daily")]
    pub task_id: i32,
    #[sea_orm(unique_key = "daily")]
    pub task_date: Date,
    pub progress: i32,
    pub completed: bool,
    pub claimed: bool,
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
        belongs_to = "super::daily_task::Entity",
        from = "Column::TaskId",
        to = "super::daily_task::Column::Id",
        on_delete = "Cascade"
    )]
    DailyTask,
}

impl Related<super::visitor_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitorProfile.def()
    }
}

impl Related<super::daily_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyTask.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
