//! Daily tasks: per-day progress, claiming and management.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{daily_task::DailyTaskRepository, visitor::VisitorRepository},
    error::AppError,
    model::gamification::{ClaimOutcome, DailyTask, DailyTaskParams, TaskAction, TaskProgress},
    service::gamification::{badge::BadgeService, xp::XpService},
};

pub struct DailyTaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DailyTaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Advances today's active tasks matching `action` by one, capped at the target.
    pub async fn record_action(
        &self,
        visitor_id: &str,
        action: TaskAction,
        today: NaiveDate,
    ) -> Result<(), AppError> {
        let repo = DailyTaskRepository::new(self.db);

        for task in repo.get_active_by_action(action.as_str()).await? {
            let current = repo.find_progress(visitor_id, task.id, today).await?;
            let progress = current.as_ref().map(|row| row.progress).unwrap_or(0);

            if current.as_ref().is_some_and(|row| row.completed) {
                continue;
            }

            let progress = (progress + 1).min(task.target);
            repo.save_progress(visitor_id, task.id, today, progress, progress >= task.target)
                .await?;
        }

        Ok(())
    }

    /// Every active task with the visitor's progress for `today`.
    ///
    /// # Returns
    /// - `Ok(Vec<TaskProgress>)` - Tasks in id order, zero progress when untouched
    /// - `Err(AppError::NotFound)` - No profile with that visitor id
    pub async fn today_tasks(
        &self,
        visitor_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<TaskProgress>, AppError> {
        if VisitorRepository::new(self.db).find(visitor_id).await?.is_none() {
            return Err(AppError::NotFound("Không tìm thấy hồ sơ độc giả".to_string()));
        }

        let repo = DailyTaskRepository::new(self.db);
        let mut rows: HashMap<i32, _> = repo
            .get_progress_for_day(visitor_id, today)
            .await?
            .into_iter()
            .map(|row| (row.task_id, row))
            .collect();

        let tasks = repo
            .get_active()
            .await?
            .into_iter()
            .map(|task| match rows.remove(&task.id) {
                Some(row) => TaskProgress {
                    task,
                    progress: row.progress,
                    completed: row.completed,
                    claimed: row.claimed,
                },
                None => TaskProgress {
                    task,
                    progress: 0,
                    completed: false,
                    claimed: false,
                },
            })
            .collect();

        Ok(tasks)
    }

    /// Claims the XP reward of a completed task.
    ///
    /// # Returns
    /// - `Ok(ClaimOutcome)` - XP granted and badges earned as a result
    /// - `Err(AppError::NotFound)` - Unknown visitor or task
    /// - `Err(AppError::BadRequest)` - Task not completed today or already claimed
    pub async fn claim(
        &self,
        visitor_id: &str,
        task_id: i32,
        today: NaiveDate,
    ) -> Result<ClaimOutcome, AppError> {
        if VisitorRepository::new(self.db).find(visitor_id).await?.is_none() {
            return Err(AppError::NotFound("Không tìm thấy hồ sơ độc giả".to_string()));
        }

        let repo = DailyTaskRepository::new(self.db);
        let Some(task) = repo.find_by_id(task_id).await? else {
            return Err(AppError::NotFound("Không tìm thấy nhiệm vụ".to_string()));
        };

        let Some(row) = repo.find_progress(visitor_id, task.id, today).await? else {
            return Err(AppError::BadRequest("Nhiệm vụ chưa hoàn thành".to_string()));
        };
        if !row.completed {
            return Err(AppError::BadRequest("Nhiệm vụ chưa hoàn thành".to_string()));
        }
        if !repo.mark_claimed(row.id).await? {
            return Err(AppError::BadRequest("Phần thưởng đã được nhận".to_string()));
        }

        let award = XpService::new(self.db)
            .award(visitor_id, task.xp_reward, &format!("task:{}", task.slug))
            .await?;
        let new_badges = BadgeService::new(self.db).evaluate(visitor_id).await?;

        Ok(ClaimOutcome {
            task_id: task.id,
            award,
            new_badges,
        })
    }

    pub async fn list(&self) -> Result<Vec<DailyTask>, AppError> {
        Ok(DailyTaskRepository::new(self.db).get_all().await?)
    }

    /// Creates a task.
    ///
    /// # Returns
    /// - `Ok(DailyTask)` - Created task
    /// - `Err(AppError::Conflict)` - Slug already used by another task
    pub async fn create(&self, params: DailyTaskParams) -> Result<DailyTask, AppError> {
        let repo = DailyTaskRepository::new(self.db);

        if let Some(slug) = params.slug.as_deref() {
            if repo.slug_exists(slug).await? {
                return Err(AppError::Conflict("Mã nhiệm vụ đã tồn tại".to_string()));
            }
        }

        Ok(repo.create(params).await?)
    }

    pub async fn update(&self, id: i32, params: DailyTaskParams) -> Result<DailyTask, AppError> {
        DailyTaskRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy nhiệm vụ".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !DailyTaskRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Không tìm thấy nhiệm vụ".to_string()));
        }

        Ok(())
    }
}
