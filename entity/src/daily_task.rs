use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "daily_task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    pub description: String,
    /// One of `read_post`, `comment`, `reaction`, `poll_vote`, `check_in`.
    pub action_type: String,
    pub target: i32,
    pub xp_reward: i32,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_daily_task::Entity")]
    UserDailyTask,
}

impl Related<super::user_daily_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserDailyTask.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
