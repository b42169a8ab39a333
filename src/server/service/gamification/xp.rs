//! XP rewards and awarding.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::visitor::VisitorRepository,
    error::AppError,
    model::gamification::{Activity, XpAward},
    service::gamification::level::level_for_xp,
};

pub const READ_POST_XP: i32 = 10;
pub const COMMENT_XP: i32 = 15;
pub const REACTION_XP: i32 = 2;
pub const POLL_VOTE_XP: i32 = 5;
pub const CHECK_IN_XP: i32 = 5;
pub const STREAK_MILESTONE_XP: i32 = 20;

/// XP granted for an activity.
pub fn activity_xp(activity: Activity) -> i32 {
    match activity {
        Activity::ReadPost => READ_POST_XP,
        Activity::Comment => COMMENT_XP,
        Activity::Reaction => REACTION_XP,
        Activity::PollVote => POLL_VOTE_XP,
    }
}

pub struct XpService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> XpService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds XP to a visitor, records the transaction and recomputes the level.
    ///
    /// # Returns
    /// - `Ok(XpAward)` - New total and whether the visitor levelled up
    /// - `Err(AppError::NotFound)` - No profile with that visitor id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn award(
        &self,
        visitor_id: &str,
        amount: i32,
        reason: &str,
    ) -> Result<XpAward, AppError> {
        let award = VisitorRepository::new(self.db)
            .award_xp(visitor_id, amount, reason, level_for_xp)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy hồ sơ độc giả".to_string()))?;

        if award.leveled_up {
            tracing::info!("Visitor {} reached level {}", visitor_id, award.level);
        }

        Ok(award)
    }
}
