//! Badge evaluation and management.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        gamification::{BadgeRepository, StreakRepository},
        visitor::VisitorRepository,
    },
    error::AppError,
    model::gamification::{Badge, BadgeParams, BadgeRequirement, VisitorBadge},
    service::gamification::xp::XpService,
};

pub struct BadgeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BadgeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Awards every badge whose requirement the visitor now meets.
    ///
    /// Badge XP rewards are granted as the badge is awarded, which can unlock further
    /// `xp` or `level` badges, so evaluation repeats until a pass awards nothing.
    /// Streak badges are measured against the longest streak. Visitors without a
    /// profile earn nothing.
    ///
    /// # Returns
    /// - `Ok(Vec<Badge>)` - Badges newly earned by this call
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn evaluate(&self, visitor_id: &str) -> Result<Vec<Badge>, AppError> {
        let badge_repo = BadgeRepository::new(self.db);
        let visitor_repo = VisitorRepository::new(self.db);

        let badges = badge_repo.get_all().await?;
        let earned = badge_repo.get_earned_at(visitor_id).await?;
        let longest_streak = StreakRepository::new(self.db)
            .find(visitor_id)
            .await?
            .map(|s| s.longest_streak)
            .unwrap_or(0);

        let mut pending: Vec<Badge> = badges
            .into_iter()
            .filter(|badge| !earned.contains_key(&badge.id))
            .collect();
        let mut new_badges = Vec::new();

        loop {
            let Some(profile) = visitor_repo.find(visitor_id).await? else {
                return Ok(new_badges);
            };
            let stats = profile.stats(longest_streak);

            let (met, rest): (Vec<Badge>, Vec<Badge>) =
                pending.into_iter().partition(|badge| {
                    BadgeRequirement::parse(&badge.requirement_type)
                        .is_some_and(|req| stats.value_for(req) >= badge.requirement_value)
                });
            pending = rest;

            if met.is_empty() {
                return Ok(new_badges);
            }

            for badge in met {
                if !badge_repo.award(visitor_id, badge.id, Utc::now()).await? {
                    continue;
                }

                if badge.xp_reward > 0 {
                    XpService::new(self.db)
                        .award(visitor_id, badge.xp_reward, &format!("badge:{}", badge.slug))
                        .await?;
                }

                tracing::info!("Visitor {} earned badge {}", visitor_id, badge.slug);
                new_badges.push(badge);
            }
        }
    }

    /// Every badge with the visitor's earned state.
    pub async fn list_for_visitor(&self, visitor_id: &str) -> Result<Vec<VisitorBadge>, AppError> {
        if VisitorRepository::new(self.db).find(visitor_id).await?.is_none() {
            return Err(AppError::NotFound("Không tìm thấy hồ sơ độc giả".to_string()));
        }

        Ok(BadgeRepository::new(self.db).get_for_visitor(visitor_id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Badge>, AppError> {
        Ok(BadgeRepository::new(self.db).get_all().await?)
    }

    /// Creates a badge.
    ///
    /// # Returns
    /// - `Ok(Badge)` - Created badge
    /// - `Err(AppError::Conflict)` - Slug already used by another badge
    pub async fn create(&self, params: BadgeParams) -> Result<Badge, AppError> {
        let repo = BadgeRepository::new(self.db);

        if let Some(slug) = params.slug.as_deref() {
            if repo.slug_exists(slug).await? {
                return Err(AppError::Conflict("Mã huy hiệu đã tồn tại".to_string()));
            }
        }

        Ok(repo.create(params).await?)
    }

    pub async fn update(&self, id: i32, params: BadgeParams) -> Result<Badge, AppError> {
        BadgeRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy huy hiệu".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !BadgeRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Không tìm thấy huy hiệu".to_string()));
        }

        Ok(())
    }
}
