//! Reading progress and history.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        post::PostRepository, reading_history::ReadingHistoryRepository,
        visitor::VisitorRepository,
    },
    error::AppError,
    model::gamification::{Activity, ActivityOutcome, ReadOutcome, ReadingEntry},
    service::gamification::activity::ActivityService,
};

/// Progress percentage at which a post counts as read.
pub const COMPLETION_THRESHOLD: i32 = 80;

/// Entries returned by the history listing.
const HISTORY_LIMIT: u64 = 50;

pub struct ReadingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReadingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records how far a visitor has read a post.
    ///
    /// Stored progress only ever grows. The first time it reaches the completion
    /// threshold the `read_post` activity fires.
    ///
    /// # Returns
    /// - `Ok(ReadOutcome)` - Stored progress and any rewards
    /// - `Err(AppError::NotFound)` - Unknown visitor, or post missing or unpublished
    pub async fn record_read(
        &self,
        visitor_id: &str,
        post_id: i32,
        progress: i32,
        now: DateTime<Utc>,
    ) -> Result<ReadOutcome, AppError> {
        if VisitorRepository::new(self.db).find(visitor_id).await?.is_none() {
            return Err(AppError::NotFound("Không tìm thấy hồ sơ độc giả".to_string()));
        }
        match PostRepository::new(self.db).find_by_id(post_id).await? {
            Some(post) if post.published => {}
            _ => return Err(AppError::NotFound("Không tìm thấy bài viết".to_string())),
        }

        let repo = ReadingHistoryRepository::new(self.db);
        let existing = repo.find(visitor_id, post_id).await?;

        let previous = existing.as_ref().map(|row| row.progress).unwrap_or(0);
        let was_completed = existing.as_ref().is_some_and(|row| row.completed);

        let progress = progress.clamp(0, 100).max(previous);
        let completed = was_completed || progress >= COMPLETION_THRESHOLD;
        repo.upsert(visitor_id, post_id, progress, completed, now).await?;

        let newly_completed = completed && !was_completed;
        let activity = if newly_completed {
            ActivityService::new(self.db)
                .record(visitor_id, Activity::ReadPost)
                .await?
        } else {
            ActivityOutcome::default()
        };

        Ok(ReadOutcome {
            post_id,
            progress,
            completed,
            newly_completed,
            activity,
        })
    }

    pub async fn history(&self, visitor_id: &str) -> Result<Vec<ReadingEntry>, AppError> {
        if VisitorRepository::new(self.db).find(visitor_id).await?.is_none() {
            return Err(AppError::NotFound("Không tìm thấy hồ sơ độc giả".to_string()));
        }

        Ok(ReadingHistoryRepository::new(self.db)
            .get_for_visitor(visitor_id, HISTORY_LIMIT)
            .await?)
    }
}
