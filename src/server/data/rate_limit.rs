use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct RateLimitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RateLimitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the limiter row for an identity and action.
    pub async fn find(
        &self,
        identifier: &str,
        action: &str,
    ) -> Result<Option<entity::rate_limit::Model>, DbErr> {
        entity::prelude::RateLimit::find()
            .filter(entity::rate_limit::Column::Identifier.eq(identifier))
            .filter(entity::rate_limit::Column::Action.eq(action))
            .one(self.db)
            .await
    }

    /// Inserts an empty window for the pair unless a row already exists.
    ///
    /// Concurrent first requests race on the `(identifier, action)` unique index and
    /// all but one insert become no-ops.
    pub async fn open_window(
        &self,
        identifier: &str,
        action: &str,
        reset_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let window = entity::rate_limit::ActiveModel {
            identifier: ActiveValue::Set(identifier.to_string()),
            action: ActiveValue::Set(action.to_string()),
            count: ActiveValue::Set(0),
            reset_at: ActiveValue::Set(reset_at),
            ..Default::default()
        };

        entity::prelude::RateLimit::insert(window)
            .on_conflict(
                OnConflict::columns([
                    entity::rate_limit::Column::Identifier,
                    entity::rate_limit::Column::Action,
                ])
                .do_nothing()
                .to_owned(),
            )
            .do_nothing()
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Starts the window over with a count of 0 if it ended at or before `now`.
    ///
    /// # Returns
    /// - `Ok(true)` - The window had elapsed and was restarted
    /// - `Ok(false)` - The window is still running
    pub async fn restart_elapsed(
        &self,
        identifier: &str,
        action: &str,
        now: DateTime<Utc>,
        reset_at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::RateLimit::update_many()
            .col_expr(entity::rate_limit::Column::Count, Expr::value(0))
            .col_expr(entity::rate_limit::Column::ResetAt, Expr::value(reset_at))
            .filter(entity::rate_limit::Column::Identifier.eq(identifier))
            .filter(entity::rate_limit::Column::Action.eq(action))
            .filter(entity::rate_limit::Column::ResetAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Increments the count in one statement, only while it is below `limit` and the
    /// window is still running.
    ///
    /// # Returns
    /// - `Ok(true)` - The request was counted
    /// - `Ok(false)` - The window is full
    pub async fn try_count(
        &self,
        identifier: &str,
        action: &str,
        limit: i32,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::RateLimit::update_many()
            .col_expr(
                entity::rate_limit::Column::Count,
                Expr::col(entity::rate_limit::Column::Count).add(1),
            )
            .filter(entity::rate_limit::Column::Identifier.eq(identifier))
            .filter(entity::rate_limit::Column::Action.eq(action))
            .filter(entity::rate_limit::Column::Count.lt(limit))
            .filter(entity::rate_limit::Column::ResetAt.gt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes rows whose window ended at or before `now`.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::RateLimit::delete_many()
            .filter(entity::rate_limit::Column::ResetAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
