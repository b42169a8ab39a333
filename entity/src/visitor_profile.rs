use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "visitor_profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub visitor_id: String,
    pub display_name: String,
    pub xp: i32,
    pub level: i32,
    pub posts_read: i32,
    pub comments_count: i32,
    pub reactions_count: i32,
    pub votes_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::streak::Entity")]
    Streak,
    #[sea_orm(has_many = "super::user_badge::Entity")]
    UserBadge,
    #[sea_orm(has_many = "super::xp_transaction::Entity")]
    XpTransaction,
}

impl Related<super::streak::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Streak.def()
    }
}

impl Related<super::user_badge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBadge.def()
    }
}

impl Related<super::xp_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::XpTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
