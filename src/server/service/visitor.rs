//! Anonymous visitor profiles.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{gamification::BadgeRepository, visitor::VisitorRepository},
    error::AppError,
    model::visitor::{CreateVisitorParams, VisitorOverview, VisitorProfile},
    service::gamification::{level::level_progress, streak::StreakService},
    util::sanitize::{sanitize_opt, sanitize_required},
};

pub struct VisitorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisitorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the profile for a visitor id, creating it on first sight.
    ///
    /// Without a display name the visitor is called `Độc giả` plus the first six
    /// characters of their id. An existing profile is returned unchanged.
    pub async fn get_or_create(
        &self,
        params: CreateVisitorParams,
    ) -> Result<VisitorOverview, AppError> {
        let repo = VisitorRepository::new(self.db);

        if repo.find(&params.visitor_id).await?.is_none() {
            let display_name = sanitize_opt(params.display_name.as_deref()).unwrap_or_else(|| {
                let short: String = params.visitor_id.chars().take(6).collect();
                format!("Độc giả {}", short)
            });

            repo.create(&params.visitor_id, &display_name).await?;
            tracing::debug!("Created visitor profile {}", params.visitor_id);
        }

        self.get(&params.visitor_id).await
    }

    /// Profile with level progress, streak and earned badge count.
    pub async fn get(&self, visitor_id: &str) -> Result<VisitorOverview, AppError> {
        let profile = self.find_profile(visitor_id).await?;

        let streak = StreakService::new(self.db).get(visitor_id).await?;
        let badges_count = BadgeRepository::new(self.db)
            .count_earned(visitor_id)
            .await?;

        Ok(VisitorOverview {
            level: level_progress(profile.xp),
            profile,
            streak,
            badges_count,
        })
    }

    pub async fn update_display_name(
        &self,
        visitor_id: &str,
        display_name: &str,
    ) -> Result<VisitorOverview, AppError> {
        VisitorRepository::new(self.db)
            .update_display_name(
                visitor_id,
                &sanitize_required(display_name, "Tên hiển thị không được để trống")?,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy hồ sơ độc giả".to_string()))?;

        self.get(visitor_id).await
    }

    /// Deletes the profile and all gamification data of the visitor.
    pub async fn delete(&self, visitor_id: &str) -> Result<(), AppError> {
        if !VisitorRepository::new(self.db)
            .delete_with_activity(visitor_id)
            .await?
        {
            return Err(AppError::NotFound("Không tìm thấy hồ sơ độc giả".to_string()));
        }

        tracing::info!("Deleted visitor profile {}", visitor_id);

        Ok(())
    }

    async fn find_profile(&self, visitor_id: &str) -> Result<VisitorProfile, AppError> {
        VisitorRepository::new(self.db)
            .find(visitor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy hồ sơ độc giả".to_string()))
    }
}
