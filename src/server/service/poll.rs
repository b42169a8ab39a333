//! Polls and one-vote-per-identity voting.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{poll::PollRepository, post::PostRepository},
    error::AppError,
    model::{
        gamification::Activity,
        poll::{CreatePollParams, Poll},
    },
    service::gamification::activity::ActivityService,
};

pub struct PollService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Polls with the option each was voted for by `ip_hash`.
    pub async fn list(
        &self,
        post_id: Option<i32>,
        ip_hash: &str,
    ) -> Result<Vec<(Poll, Option<i32>)>, AppError> {
        let repo = PollRepository::new(self.db);

        let polls = repo.get_all(post_id).await?;
        let ids: Vec<i32> = polls.iter().map(|p| p.id).collect();
        let votes = repo.find_votes(&ids, ip_hash).await?;

        Ok(polls
            .into_iter()
            .map(|poll| {
                let voted = votes.get(&poll.id).copied();
                (poll, voted)
            })
            .collect())
    }

    pub async fn get(&self, id: i32, ip_hash: &str) -> Result<(Poll, Option<i32>), AppError> {
        let repo = PollRepository::new(self.db);

        let poll = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy cuộc bình chọn".to_string()))?;
        let voted = repo.find_vote(id, ip_hash).await?;

        Ok((poll, voted))
    }

    /// Casts the caller's vote.
    ///
    /// # Returns
    /// - `Ok(Poll)` - Poll with updated counts
    /// - `Err(AppError::NotFound)` - Poll doesn't exist
    /// - `Err(AppError::BadRequest)` - Poll closed or past its end, or option not in poll
    /// - `Err(AppError::Conflict)` - This identity already voted in the poll
    pub async fn vote(
        &self,
        poll_id: i32,
        option_id: i32,
        ip_hash: &str,
        visitor_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Poll, AppError> {
        let repo = PollRepository::new(self.db);

        let poll = repo
            .find_by_id(poll_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy cuộc bình chọn".to_string()))?;

        if !poll.is_open(now) {
            return Err(AppError::BadRequest("Cuộc bình chọn đã kết thúc".to_string()));
        }
        if !poll.has_option(option_id) {
            return Err(AppError::BadRequest(
                "Lựa chọn không thuộc cuộc bình chọn này".to_string(),
            ));
        }
        if !repo.record_vote(poll_id, option_id, ip_hash).await? {
            return Err(AppError::Conflict("Bạn đã bình chọn rồi".to_string()));
        }

        ActivityService::new(self.db)
            .record_after(visitor_id, Activity::PollVote)
            .await;

        repo.find_by_id(poll_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy cuộc bình chọn".to_string()))
    }

    /// Creates a poll, optionally attached to an existing post.
    pub async fn create(&self, params: CreatePollParams) -> Result<Poll, AppError> {
        if let Some(post_id) = params.post_id {
            if PostRepository::new(self.db).find_by_id(post_id).await?.is_none() {
                return Err(AppError::NotFound("Không tìm thấy bài viết".to_string()));
            }
        }

        let poll = PollRepository::new(self.db).create(params).await?;
        tracing::info!("Created poll {}", poll.id);

        Ok(poll)
    }

    /// Closes or reopens a poll.
    pub async fn set_active(&self, id: i32, active: bool) -> Result<Poll, AppError> {
        let repo = PollRepository::new(self.db);

        if !repo.set_active(id, active).await? {
            return Err(AppError::NotFound("Không tìm thấy cuộc bình chọn".to_string()));
        }

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy cuộc bình chọn".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PollRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Không tìm thấy cuộc bình chọn".to_string()));
        }

        Ok(())
    }
}
