use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait, TryInsertResult,
};
use std::collections::HashMap;

use crate::server::model::poll::{CreatePollParams, Poll};

pub struct PollRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a poll and its options in one transaction.
    ///
    /// Options keep the order given, stored as `position` 0, 1, 2, ...
    pub async fn create(&self, params: CreatePollParams) -> Result<Poll, DbErr> {
        let txn = self.db.begin().await?;

        let poll = entity::poll::ActiveModel {
            post_id: ActiveValue::Set(params.post_id),
            question: ActiveValue::Set(params.question),
            active: ActiveValue::Set(true),
            ends_at: ActiveValue::Set(params.ends_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut options = Vec::with_capacity(params.options.len());
        for (position, text) in params.options.into_iter().enumerate() {
            let option = entity::poll_option::ActiveModel {
                poll_id: ActiveValue::Set(poll.id),
                text: ActiveValue::Set(text),
                position: ActiveValue::Set(position as i32),
                vote_count: ActiveValue::Set(0),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            options.push(option);
        }

        txn.commit().await?;

        Ok(Poll::from_entity(poll, options))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Poll>, DbErr> {
        let Some(poll) = entity::prelude::Poll::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let options = entity::prelude::PollOption::find()
            .filter(entity::poll_option::Column::PollId.eq(id))
            .all(self.db)
            .await?;

        Ok(Some(Poll::from_entity(poll, options)))
    }

    /// Lists polls newest first, optionally only those attached to a post.
    pub async fn get_all(&self, post_id: Option<i32>) -> Result<Vec<Poll>, DbErr> {
        let mut query = entity::prelude::Poll::find();

        if let Some(post_id) = post_id {
            query = query.filter(entity::poll::Column::PostId.eq(post_id));
        }

        let polls = query
            .order_by_desc(entity::poll::Column::CreatedAt)
            .order_by_desc(entity::poll::Column::Id)
            .all(self.db)
            .await?;

        if polls.is_empty() {
            return Ok(Vec::new());
        }

        let poll_ids: Vec<i32> = polls.iter().map(|p| p.id).collect();
        let mut options_by_poll: HashMap<i32, Vec<entity::poll_option::Model>> = HashMap::new();
        for option in entity::prelude::PollOption::find()
            .filter(entity::poll_option::Column::PollId.is_in(poll_ids))
            .all(self.db)
            .await?
        {
            options_by_poll.entry(option.poll_id).or_default().push(option);
        }

        Ok(polls
            .into_iter()
            .map(|poll| {
                let options = options_by_poll.remove(&poll.id).unwrap_or_default();
                Poll::from_entity(poll, options)
            })
            .collect())
    }

    pub async fn set_active(&self, id: i32, active: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Poll::update_many()
            .col_expr(entity::poll::Column::Active, Expr::value(active))
            .filter(entity::poll::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a poll; options and votes cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Poll::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Option an identity voted for in a poll, if any.
    pub async fn find_vote(&self, poll_id: i32, ip_hash: &str) -> Result<Option<i32>, DbErr> {
        let vote = entity::prelude::PollVote::find()
            .filter(entity::poll_vote::Column::PollId.eq(poll_id))
            .filter(entity::poll_vote::Column::IpHash.eq(ip_hash))
            .one(self.db)
            .await?;

        Ok(vote.map(|v| v.option_id))
    }

    /// Votes of one identity across the given polls, keyed by poll id.
    pub async fn find_votes(
        &self,
        poll_ids: &[i32],
        ip_hash: &str,
    ) -> Result<HashMap<i32, i32>, DbErr> {
        if poll_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let votes = entity::prelude::PollVote::find()
            .filter(entity::poll_vote::Column::PollId.is_in(poll_ids.to_vec()))
            .filter(entity::poll_vote::Column::IpHash.eq(ip_hash))
            .all(self.db)
            .await?;

        Ok(votes.into_iter().map(|v| (v.poll_id, v.option_id)).collect())
    }

    /// Stores a vote and bumps the option's count in one transaction.
    ///
    /// The insert is a no-op when the identity already voted in the poll, so
    /// concurrent duplicates can't get past the `(poll_id, ip_hash)` unique index.
    ///
    /// # Returns
    /// - `Ok(true)` - Vote recorded
    /// - `Ok(false)` - This identity already voted, nothing changed
    pub async fn record_vote(
        &self,
        poll_id: i32,
        option_id: i32,
        ip_hash: &str,
    ) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let vote = entity::poll_vote::ActiveModel {
            poll_id: ActiveValue::Set(poll_id),
            option_id: ActiveValue::Set(option_id),
            ip_hash: ActiveValue::Set(ip_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        let inserted = entity::prelude::PollVote::insert(vote)
            .on_conflict(
                OnConflict::columns([
                    entity::poll_vote::Column::PollId,
                    entity::poll_vote::Column::IpHash,
                ])
                .do_nothing()
                .to_owned(),
            )
            .do_nothing()
            .exec_without_returning(&txn)
            .await?;

        if !matches!(inserted, TryInsertResult::Inserted(rows) if rows > 0) {
            return Ok(false);
        }

        entity::prelude::PollOption::update_many()
            .col_expr(
                entity::poll_option::Column::VoteCount,
                Expr::col(entity::poll_option::Column::VoteCount).add(1),
            )
            .filter(entity::poll_option::Column::Id.eq(option_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }

    pub async fn count_votes(&self) -> Result<u64, DbErr> {
        entity::prelude::PollVote::find().count(self.db).await
    }
}
