use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::gamification::{Badge, BadgeParams, Streak, VisitorBadge};

pub struct BadgeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BadgeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All badges ordered by requirement type, then threshold.
    pub async fn get_all(&self) -> Result<Vec<Badge>, DbErr> {
        let entities = entity::prelude::Badge::find()
            .order_by_asc(entity::badge::Column::RequirementType)
            .order_by_asc(entity::badge::Column::RequirementValue)
            .order_by_asc(entity::badge::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Badge::from_entity).collect())
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Badge::find()
            .filter(entity::badge::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, params: BadgeParams) -> Result<Badge, DbErr> {
        let entity = entity::badge::ActiveModel {
            slug: ActiveValue::Set(params.slug.unwrap_or_default()),
            name: ActiveValue::Set(params.name.unwrap_or_default()),
            description: ActiveValue::Set(params.description.unwrap_or_default()),
            icon: ActiveValue::Set(params.icon.unwrap_or_default()),
            requirement_type: ActiveValue::Set(params.requirement_type.unwrap_or_default()),
            requirement_value: ActiveValue::Set(params.requirement_value.unwrap_or(1)),
            xp_reward: ActiveValue::Set(params.xp_reward.unwrap_or(0)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Badge::from_entity(entity))
    }

    /// Applies the fields present in `params`. Returns `None` when the badge doesn't exist.
    pub async fn update(&self, id: i32, params: BadgeParams) -> Result<Option<Badge>, DbErr> {
        let Some(existing) = entity::prelude::Badge::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::badge::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(icon) = params.icon {
            active.icon = ActiveValue::Set(icon);
        }
        if let Some(requirement_type) = params.requirement_type {
            active.requirement_type = ActiveValue::Set(requirement_type);
        }
        if let Some(requirement_value) = params.requirement_value {
            active.requirement_value = ActiveValue::Set(requirement_value);
        }
        if let Some(xp_reward) = params.xp_reward {
            active.xp_reward = ActiveValue::Set(xp_reward);
        }
        let entity = active.update(self.db).await?;

        Ok(Some(Badge::from_entity(entity)))
    }

    /// Deletes a badge and every award of it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::UserBadge::delete_many()
            .filter(entity::user_badge::Column::BadgeId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Badge::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Every badge, paired with when the visitor earned it (if they have).
    pub async fn get_for_visitor(&self, visitor_id: &str) -> Result<Vec<VisitorBadge>, DbErr> {
        let earned = self.get_earned_at(visitor_id).await?;

        let badges = self
            .get_all()
            .await?
            .into_iter()
            .map(|badge| VisitorBadge {
                earned_at: earned.get(&badge.id).copied(),
                badge,
            })
            .collect();

        Ok(badges)
    }

    /// Map of badge id to award time for a visitor.
    pub async fn get_earned_at(
        &self,
        visitor_id: &str,
    ) -> Result<HashMap<i32, DateTime<Utc>>, DbErr> {
        let earned = entity::prelude::UserBadge::find()
            .filter(entity::user_badge::Column::VisitorId.eq(visitor_id))
            .all(self.db)
            .await?;

        Ok(earned
            .into_iter()
            .map(|row| (row.badge_id, row.earned_at))
            .collect())
    }

    pub async fn count_earned(&self, visitor_id: &str) -> Result<u64, DbErr> {
        entity::prelude::UserBadge::find()
            .filter(entity::user_badge::Column::VisitorId.eq(visitor_id))
            .count(self.db)
            .await
    }

    /// Records that a visitor earned a badge.
    ///
    /// # Returns
    /// - `Ok(true)` - Badge newly awarded
    /// - `Ok(false)` - Visitor already had the badge
    pub async fn award(
        &self,
        visitor_id: &str,
        badge_id: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let existing = entity::prelude::UserBadge::find()
            .filter(entity::user_badge::Column::VisitorId.eq(visitor_id))
            .filter(entity::user_badge::Column::BadgeId.eq(badge_id))
            .count(self.db)
            .await?;

        if existing > 0 {
            return Ok(false);
        }

        entity::user_badge::ActiveModel {
            visitor_id: ActiveValue::Set(visitor_id.to_string()),
            badge_id: ActiveValue::Set(badge_id),
            earned_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }
}

pub struct StreakRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StreakRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, visitor_id: &str) -> Result<Option<Streak>, DbErr> {
        let entity = self.find_entity(visitor_id).await?;

        Ok(entity.map(Streak::from_entity))
    }

    /// Inserts or replaces the visitor's streak row.
    pub async fn save(&self, visitor_id: &str, streak: &Streak) -> Result<(), DbErr> {
        let now = Utc::now();

        match self.find_entity(visitor_id).await? {
            Some(existing) => {
                let mut active: entity::streak::ActiveModel = existing.into();
                active.current_streak = ActiveValue::Set(streak.current_streak);
                active.longest_streak = ActiveValue::Set(streak.longest_streak);
                active.freezes_available = ActiveValue::Set(streak.freezes_available);
                active.last_check_in = ActiveValue::Set(streak.last_check_in);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?;
            }
            None => {
                entity::streak::ActiveModel {
                    visitor_id: ActiveValue::Set(visitor_id.to_string()),
                    current_streak: ActiveValue::Set(streak.current_streak),
                    longest_streak: ActiveValue::Set(streak.longest_streak),
                    freezes_available: ActiveValue::Set(streak.freezes_available),
                    last_check_in: ActiveValue::Set(streak.last_check_in),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    async fn find_entity(&self, visitor_id: &str) -> Result<Option<entity::streak::Model>, DbErr> {
        entity::prelude::Streak::find()
            .filter(entity::streak::Column::VisitorId.eq(visitor_id))
            .one(self.db)
            .await
    }
}
