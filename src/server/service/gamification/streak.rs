//! Daily check-in streaks with freeze tokens.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{gamification::StreakRepository, visitor::VisitorRepository},
    error::AppError,
    model::gamification::{CheckInOutcome, Streak, StreakUpdate, TaskAction},
    service::gamification::{
        badge::BadgeService,
        daily_task::DailyTaskService,
        level::level_progress,
        xp::{XpService, CHECK_IN_XP, STREAK_MILESTONE_XP},
    },
};

/// Most freeze tokens a visitor can hold.
pub const MAX_FREEZES: i32 = 3;

/// Streak length that earns a freeze token and the milestone bonus.
pub const MILESTONE_DAYS: i32 = 7;

/// Applies a check-in on `today` to a streak.
///
/// Missed days are covered by freeze tokens when the visitor holds enough of them
/// to bridge the whole gap; otherwise the streak restarts at 1.
pub fn apply_check_in(streak: &Streak, today: NaiveDate) -> StreakUpdate {
    let mut next = streak.clone();
    let mut freezes_used = 0;
    let mut streak_reset = false;

    match streak.last_check_in {
        None => next.current_streak = 1,
        Some(last) => {
            let gap = (today - last).num_days();

            if gap <= 0 {
                return StreakUpdate {
                    streak: streak.clone(),
                    already_checked_in: true,
                    freezes_used: 0,
                    freeze_earned: false,
                    streak_reset: false,
                    milestone: false,
                };
            }

            let missed = gap - 1;
            if missed == 0 {
                next.current_streak += 1;
            } else if missed <= streak.freezes_available as i64 {
                freezes_used = missed as i32;
                next.freezes_available -= freezes_used;
                next.current_streak += 1;
            } else {
                next.current_streak = 1;
                streak_reset = true;
            }
        }
    }

    let milestone = next.current_streak % MILESTONE_DAYS == 0;
    let freeze_earned = milestone && next.freezes_available < MAX_FREEZES;
    if freeze_earned {
        next.freezes_available += 1;
    }

    next.longest_streak = next.longest_streak.max(next.current_streak);
    next.last_check_in = Some(today);

    StreakUpdate {
        streak: next,
        already_checked_in: false,
        freezes_used,
        freeze_earned,
        streak_reset,
        milestone,
    }
}

pub struct StreakService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StreakService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Current streak of a visitor, empty when they never checked in.
    pub async fn get(&self, visitor_id: &str) -> Result<Streak, AppError> {
        let streak = StreakRepository::new(self.db)
            .find(visitor_id)
            .await?
            .unwrap_or_default();

        Ok(streak)
    }

    /// Records the daily check-in of a visitor.
    ///
    /// A first check-in of the day grants the check-in XP, plus the milestone bonus
    /// every seventh consecutive day, advances `check_in` daily tasks and re-evaluates
    /// badges. Checking in again the same day changes nothing.
    ///
    /// # Returns
    /// - `Ok(CheckInOutcome)` - Updated streak and rewards
    /// - `Err(AppError::NotFound)` - No profile with that visitor id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn check_in(
        &self,
        visitor_id: &str,
        today: NaiveDate,
    ) -> Result<CheckInOutcome, AppError> {
        let Some(profile) = VisitorRepository::new(self.db).find(visitor_id).await? else {
            return Err(AppError::NotFound("Không tìm thấy hồ sơ độc giả".to_string()));
        };

        let streak_repo = StreakRepository::new(self.db);
        let current = streak_repo.find(visitor_id).await?.unwrap_or_default();
        let update = apply_check_in(&current, today);

        if update.already_checked_in {
            return Ok(CheckInOutcome {
                update,
                xp_awarded: 0,
                leveled_up: false,
                level: level_progress(profile.xp),
                new_badges: Vec::new(),
            });
        }

        streak_repo.save(visitor_id, &update.streak).await?;

        let xp_service = XpService::new(self.db);
        let mut award = xp_service.award(visitor_id, CHECK_IN_XP, "check_in").await?;
        let mut xp_awarded = award.amount;
        let mut leveled_up = award.leveled_up;

        if update.milestone {
            award = xp_service
                .award(visitor_id, STREAK_MILESTONE_XP, "streak_milestone")
                .await?;
            xp_awarded += award.amount;
            leveled_up |= award.leveled_up;

            tracing::info!(
                "Visitor {} reached a {}-day streak",
                visitor_id,
                update.streak.current_streak
            );
        }

        DailyTaskService::new(self.db)
            .record_action(visitor_id, TaskAction::CheckIn, today)
            .await?;
        let new_badges = BadgeService::new(self.db).evaluate(visitor_id).await?;

        let total_xp = match VisitorRepository::new(self.db).find(visitor_id).await? {
            Some(profile) => profile.xp,
            None => award.total_xp,
        };

        Ok(CheckInOutcome {
            update,
            xp_awarded,
            leveled_up,
            level: level_progress(total_xp),
            new_badges,
        })
    }
}
