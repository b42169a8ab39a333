use chrono::NaiveDate;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::gamification::{DailyTask, DailyTaskParams};

pub struct DailyTaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DailyTaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<DailyTask>, DbErr> {
        let entities = entity::prelude::DailyTask::find()
            .order_by_asc(entity::daily_task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DailyTask::from_entity).collect())
    }

    pub async fn get_active(&self) -> Result<Vec<DailyTask>, DbErr> {
        let entities = entity::prelude::DailyTask::find()
            .filter(entity::daily_task::Column::Active.eq(true))
            .order_by_asc(entity::daily_task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DailyTask::from_entity).collect())
    }

    pub async fn get_active_by_action(&self, action_type: &str) -> Result<Vec<DailyTask>, DbErr> {
        let entities = entity::prelude::DailyTask::find()
            .filter(entity::daily_task::Column::Active.eq(true))
            .filter(entity::daily_task::Column::ActionType.eq(action_type))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DailyTask::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<DailyTask>, DbErr> {
        let entity = entity::prelude::DailyTask::find_by_id(id).one(self.db).await?;

        Ok(entity.map(DailyTask::from_entity))
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::DailyTask::find()
            .filter(entity::daily_task::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, params: DailyTaskParams) -> Result<DailyTask, DbErr> {
        let entity = entity::daily_task::ActiveModel {
            slug: ActiveValue::Set(params.slug.unwrap_or_default()),
            title: ActiveValue::Set(params.title.unwrap_or_default()),
            description: ActiveValue::Set(params.description.unwrap_or_default()),
            action_type: ActiveValue::Set(params.action_type.unwrap_or_default()),
            target: ActiveValue::Set(params.target.unwrap_or(1)),
            xp_reward: ActiveValue::Set(params.xp_reward.unwrap_or(0)),
            active: ActiveValue::Set(params.active.unwrap_or(true)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DailyTask::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        params: DailyTaskParams,
    ) -> Result<Option<DailyTask>, DbErr> {
        let Some(existing) = entity::prelude::DailyTask::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::daily_task::ActiveModel = existing.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(action_type) = params.action_type {
            active.action_type = ActiveValue::Set(action_type);
        }
        if let Some(target) = params.target {
            active.target = ActiveValue::Set(target);
        }
        if let Some(xp_reward) = params.xp_reward {
            active.xp_reward = ActiveValue::Set(xp_reward);
        }
        if let Some(is_active) = params.active {
            active.active = ActiveValue::Set(is_active);
        }
        let entity = active.update(self.db).await?;

        Ok(Some(DailyTask::from_entity(entity)))
    }

    /// Deletes a task together with all recorded progress on it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::UserDailyTask::delete_many()
            .filter(entity::user_daily_task::Column::TaskId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::DailyTask::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Progress rows of one visitor for one day.
    pub async fn get_progress_for_day(
        &self,
        visitor_id: &str,
        day: NaiveDate,
    ) -> Result<Vec<entity::user_daily_task::Model>, DbErr> {
        entity::prelude::UserDailyTask::find()
            .filter(entity::user_daily_task::Column::VisitorId.eq(visitor_id))
            .filter(entity::user_daily_task::Column::TaskDate.eq(day))
            .all(self.db)
            .await
    }

    pub async fn find_progress(
        &self,
        visitor_id: &str,
        task_id: i32,
        day: NaiveDate,
    ) -> Result<Option<entity::user_daily_task::Model>, DbErr> {
        entity::prelude::UserDailyTask::find()
            .filter(entity::user_daily_task::Column::VisitorId.eq(visitor_id))
            .filter(entity::user_daily_task::Column::TaskId.eq(task_id))
            .filter(entity::user_daily_task::Column::TaskDate.eq(day))
            .one(self.db)
            .await
    }

    /// Stores the progress of a task for a day, creating the row on first action.
    pub async fn save_progress(
        &self,
        visitor_id: &str,
        task_id: i32,
        day: NaiveDate,
        progress: i32,
        completed: bool,
    ) -> Result<entity::user_daily_task::Model, DbErr> {
        match self.find_progress(visitor_id, task_id, day).await? {
            Some(existing) => {
                let mut active: entity::user_daily_task::ActiveModel = existing.into();
                active.progress = ActiveValue::Set(progress);
                active.completed = ActiveValue::Set(completed);
                active.update(self.db).await
            }
            None => {
                entity::user_daily_task::ActiveModel {
                    visitor_id: ActiveValue::Set(visitor_id.to_string()),
                    task_id: ActiveValue::Set(task_id),
                    task_date: ActiveValue::Set(day),
                    progress: ActiveValue::Set(progress),
                    completed: ActiveValue::Set(completed),
                    claimed: ActiveValue::Set(false),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Flips a completed progress row to claimed.
    ///
    /// The update only matches completed, unclaimed rows so two concurrent claims
    /// can't both succeed.
    ///
    /// # Returns
    /// - `Ok(true)` - Row was claimed by this call
    /// - `Ok(false)` - Row missing, incomplete or already claimed
    pub async fn mark_claimed(&self, progress_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserDailyTask::update_many()
            .col_expr(entity::user_daily_task::Column::Claimed, Expr::value(true))
            .filter(entity::user_daily_task::Column::Id.eq(progress_id))
            .filter(entity::user_daily_task::Column::Completed.eq(true))
            .filter(entity::user_daily_task::Column::Claimed.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
