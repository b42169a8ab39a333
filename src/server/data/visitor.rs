use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    gamification::XpAward,
    visitor::{VisitorCounter, VisitorProfile},
};

pub struct VisitorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisitorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        visitor_id: &str,
        display_name: &str,
    ) -> Result<VisitorProfile, DbErr> {
        let now = Utc::now();

        let entity = entity::visitor_profile::ActiveModel {
            visitor_id: ActiveValue::Set(visitor_id.to_string()),
            display_name: ActiveValue::Set(display_name.to_string()),
            xp: ActiveValue::Set(0),
            level: ActiveValue::Set(1),
            posts_read: ActiveValue::Set(0),
            comments_count: ActiveValue::Set(0),
            reactions_count: ActiveValue::Set(0),
            votes_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(VisitorProfile::from_entity(entity))
    }

    pub async fn find(&self, visitor_id: &str) -> Result<Option<VisitorProfile>, DbErr> {
        let entity = Self::find_entity(self.db, visitor_id).await?;

        Ok(entity.map(VisitorProfile::from_entity))
    }

    pub async fn update_display_name(
        &self,
        visitor_id: &str,
        display_name: &str,
    ) -> Result<Option<VisitorProfile>, DbErr> {
        let Some(existing) = Self::find_entity(self.db, visitor_id).await? else {
            return Ok(None);
        };

        let mut active: entity::visitor_profile::ActiveModel = existing.into();
        active.display_name = ActiveValue::Set(display_name.to_string());
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(VisitorProfile::from_entity(entity)))
    }

    /// Adds one to an activity counter of the profile.
    pub async fn increment_counter(
        &self,
        visitor_id: &str,
        counter: VisitorCounter,
    ) -> Result<(), DbErr> {
        let column = match counter {
            VisitorCounter::PostsRead => entity::visitor_profile::Column::PostsRead,
            VisitorCounter::Comments => entity::visitor_profile::Column::CommentsCount,
            VisitorCounter::Reactions => entity::visitor_profile::Column::ReactionsCount,
            VisitorCounter::Votes => entity::visitor_profile::Column::VotesCount,
        };

        entity::prelude::VisitorProfile::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .col_expr(
                entity::visitor_profile::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::visitor_profile::Column::VisitorId.eq(visitor_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Adds XP to a profile and records the transaction atomically.
    ///
    /// Total XP never drops below zero. `level_for` maps the new total to a level.
    ///
    /// # Returns
    /// - `Ok(Some(XpAward))` - XP applied
    /// - `Ok(None)` - No profile with that visitor id
    pub async fn award_xp(
        &self,
        visitor_id: &str,
        amount: i32,
        reason: &str,
        level_for: impl Fn(i32) -> i32,
    ) -> Result<Option<XpAward>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = Self::find_entity(&txn, visitor_id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let previous_level = existing.level;
        let total_xp = std::cmp::max(existing.xp.saturating_add(amount), 0);
        let level = level_for(total_xp);

        let mut active: entity::visitor_profile::ActiveModel = existing.into();
        active.xp = ActiveValue::Set(total_xp);
        active.level = ActiveValue::Set(level);
        active.updated_at = ActiveValue::Set(now);
        active.update(&txn).await?;

        entity::xp_transaction::ActiveModel {
            visitor_id: ActiveValue::Set(visitor_id.to_string()),
            amount: ActiveValue::Set(amount),
            reason: ActiveValue::Set(reason.to_string()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(XpAward {
            amount,
            total_xp,
            level,
            leveled_up: level > previous_level,
        }))
    }

    /// Deletes a profile together with all of its gamification rows in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Profile existed and was removed
    /// - `Ok(false)` - No profile with that visitor id
    pub async fn delete_with_activity(&self, visitor_id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::XpTransaction::delete_many()
            .filter(entity::xp_transaction::Column::VisitorId.eq(visitor_id))
            .exec(&txn)
            .await?;
        entity::prelude::Streak::delete_many()
            .filter(entity::streak::Column::VisitorId.eq(visitor_id))
            .exec(&txn)
            .await?;
        entity::prelude::UserBadge::delete_many()
            .filter(entity::user_badge::Column::VisitorId.eq(visitor_id))
            .exec(&txn)
            .await?;
        entity::prelude::UserDailyTask::delete_many()
            .filter(entity::user_daily_task::Column::VisitorId.eq(visitor_id))
            .exec(&txn)
            .await?;
        entity::prelude::ReadingHistory::delete_many()
            .filter(entity::reading_history::Column::VisitorId.eq(visitor_id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::VisitorProfile::delete_many()
            .filter(entity::visitor_profile::Column::VisitorId.eq(visitor_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::VisitorProfile::find().count(self.db).await
    }

    /// Profiles ordered by total XP, highest first. Ties go to the older profile.
    pub async fn get_top_by_xp(&self, limit: u64) -> Result<Vec<VisitorProfile>, DbErr> {
        let entities = entity::prelude::VisitorProfile::find()
            .filter(entity::visitor_profile::Column::Xp.gt(0))
            .order_by_desc(entity::visitor_profile::Column::Xp)
            .order_by_asc(entity::visitor_profile::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(VisitorProfile::from_entity).collect())
    }

    pub async fn get_many(&self, visitor_ids: &[String]) -> Result<Vec<VisitorProfile>, DbErr> {
        if visitor_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::VisitorProfile::find()
            .filter(entity::visitor_profile::Column::VisitorId.is_in(visitor_ids.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(VisitorProfile::from_entity).collect())
    }

    /// `(visitor_id, amount)` of every XP transaction created at or after `since`.
    pub async fn get_xp_since(&self, since: DateTime<Utc>) -> Result<Vec<(String, i32)>, DbErr> {
        entity::prelude::XpTransaction::find()
            .select_only()
            .column(entity::xp_transaction::Column::VisitorId)
            .column(entity::xp_transaction::Column::Amount)
            .filter(entity::xp_transaction::Column::CreatedAt.gte(since))
            .into_tuple()
            .all(self.db)
            .await
    }

    async fn find_entity<C: sea_orm::ConnectionTrait>(
        conn: &C,
        visitor_id: &str,
    ) -> Result<Option<entity::visitor_profile::Model>, DbErr> {
        entity::prelude::VisitorProfile::find()
            .filter(entity::visitor_profile::Column::VisitorId.eq(visitor_id))
            .one(conn)
            .await
    }
}
