//! Poll factory for creating polls and options.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating polls. Options are created separately with `create_option`.
pub struct PollFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: Option<i32>,
    question: String,
    active: bool,
    ends_at: Option<DateTime<Utc>>,
}

impl<'a> PollFactory<'a> {
    /// Creates a new active, open-ended poll not attached to a post.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            post_id: None,
            question: format!("Bạn thích bài viết số {} chứ?", next_id()),
            active: true,
            ends_at: None,
        }
    }

    pub fn post_id(mut self, post_id: Option<i32>) -> Self {
        self.post_id = post_id;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn ends_at(mut self, ends_at: DateTime<Utc>) -> Self {
        self.ends_at = Some(ends_at);
        self
    }

    /// Builds and inserts the poll into the database.
    pub async fn build(self) -> Result<entity::poll::Model, DbErr> {
        entity::poll::ActiveModel {
            post_id: ActiveValue::Set(self.post_id),
            question: ActiveValue::Set(self.question),
            active: ActiveValue::Set(self.active),
            ends_at: ActiveValue::Set(self.ends_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a poll option with zero votes.
pub async fn create_option(
    db: &DatabaseConnection,
    poll_id: i32,
    text: &str,
    position: i32,
) -> Result<entity::poll_option::Model, DbErr> {
    entity::poll_option::ActiveModel {
        poll_id: ActiveValue::Set(poll_id),
        text: ActiveValue::Set(text.to_string()),
        position: ActiveValue::Set(position),
        vote_count: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
}
