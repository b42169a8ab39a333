//! Poll domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::poll::{CreatePollDto, PollDto, PollOptionDto};

#[derive(Debug, Clone)]
pub struct PollOption {
    pub id: i32,
    pub text: String,
    pub position: i32,
    pub vote_count: i32,
}

impl PollOption {
    pub fn from_entity(entity: entity::poll_option::Model) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            position: entity.position,
            vote_count: entity.vote_count,
        }
    }
}

/// Poll with its options ordered by position.
#[derive(Debug, Clone)]
pub struct Poll {
    pub id: i32,
    pub post_id: Option<i32>,
    pub question: String,
    pub active: bool,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub options: Vec<PollOption>,
}

impl Poll {
    pub fn from_entity(
        entity: entity::poll::Model,
        options: Vec<entity::poll_option::Model>,
    ) -> Self {
        let mut options: Vec<PollOption> =
            options.into_iter().map(PollOption::from_entity).collect();
        options.sort_by_key(|o| (o.position, o.id));

        Self {
            id: entity.id,
            post_id: entity.post_id,
            question: entity.question,
            active: entity.active,
            ends_at: entity.ends_at,
            created_at: entity.created_at,
            options,
        }
    }

    /// Whether a vote cast at `now` is accepted.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.active && self.ends_at.is_none_or(|ends_at| ends_at > now)
    }

    pub fn total_votes(&self) -> i32 {
        self.options.iter().map(|o| o.vote_count).sum()
    }

    pub fn has_option(&self, option_id: i32) -> bool {
        self.options.iter().any(|o| o.id == option_id)
    }

    /// Converts to the DTO from the point of view of a caller.
    ///
    /// # Arguments
    /// - `voted_option_id` - Option the caller voted for, if any
    pub fn into_dto(self, voted_option_id: Option<i32>) -> PollDto {
        let total_votes = self.total_votes();

        PollDto {
            id: self.id,
            post_id: self.post_id,
            question: self.question,
            active: self.active,
            ends_at: self.ends_at,
            options: self
                .options
                .into_iter()
                .map(|o| PollOptionDto {
                    id: o.id,
                    text: o.text,
                    vote_count: o.vote_count,
                    percent: percent(o.vote_count, total_votes),
                })
                .collect(),
            total_votes,
            has_voted: voted_option_id.is_some(),
            voted_option_id,
            created_at: self.created_at,
        }
    }
}

fn percent(votes: i32, total: i32) -> u32 {
    if total <= 0 {
        return 0;
    }
    ((votes as f64 / total as f64) * 100.0).round() as u32
}

#[derive(Debug, Clone)]
pub struct CreatePollParams {
    pub post_id: Option<i32>,
    pub question: String,
    pub options: Vec<String>,
    pub ends_at: Option<DateTime<Utc>>,
}

impl CreatePollParams {
    pub fn from_dto(dto: CreatePollDto) -> Self {
        Self {
            post_id: dto.post_id,
            question: dto.question.trim().to_string(),
            options: dto.options.into_iter().map(|o| o.trim().to_string()).collect(),
            ends_at: dto.ends_at,
        }
    }
}
