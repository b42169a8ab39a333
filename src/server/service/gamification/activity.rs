//! Activity pipeline run after a visitor reads, comments, reacts or votes.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::visitor::VisitorRepository,
    error::AppError,
    model::{
        gamification::{Activity, ActivityOutcome},
        visitor::VisitorCounter,
    },
    service::gamification::{
        badge::BadgeService,
        daily_task::DailyTaskService,
        xp::{activity_xp, XpService},
    },
    util::parse::local_date,
};

fn counter_for(activity: Activity) -> VisitorCounter {
    match activity {
        Activity::ReadPost => VisitorCounter::PostsRead,
        Activity::Comment => VisitorCounter::Comments,
        Activity::Reaction => VisitorCounter::Reactions,
        Activity::PollVote => VisitorCounter::Votes,
    }
}

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Credits an activity to a visitor.
    ///
    /// Bumps the matching counter, grants the activity XP, advances today's daily
    /// tasks and re-evaluates badges. Unknown visitor ids are ignored.
    pub async fn record(
        &self,
        visitor_id: &str,
        activity: Activity,
    ) -> Result<ActivityOutcome, AppError> {
        let visitor_repo = VisitorRepository::new(self.db);
        if visitor_repo.find(visitor_id).await?.is_none() {
            return Ok(ActivityOutcome::default());
        }

        visitor_repo
            .increment_counter(visitor_id, counter_for(activity))
            .await?;

        let award = XpService::new(self.db)
            .award(visitor_id, activity_xp(activity), activity.reason())
            .await?;

        DailyTaskService::new(self.db)
            .record_action(visitor_id, activity.task_action(), local_date(Utc::now()))
            .await?;

        let new_badges = BadgeService::new(self.db).evaluate(visitor_id).await?;

        Ok(ActivityOutcome {
            xp_awarded: award.amount,
            leveled_up: award.leveled_up,
            new_badges,
        })
    }

    /// Runs `record` after a primary action that already succeeded.
    ///
    /// Failures are logged and swallowed so they never undo the primary action.
    pub async fn record_after(
        &self,
        visitor_id: Option<&str>,
        activity: Activity,
    ) -> ActivityOutcome {
        let Some(visitor_id) = visitor_id else {
            return ActivityOutcome::default();
        };

        match self.record(visitor_id, activity).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(
                    "Failed to record {} activity for visitor {}: {}",
                    activity.reason(),
                    visitor_id,
                    e
                );
                ActivityOutcome::default()
            }
        }
    }
}
