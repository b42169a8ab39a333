use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{
    gamification::BadgeDto,
    validation::{trimmed, trimmed_opt},
};

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct CreateVisitorDto {
    #[validate(length(min = 8, max = 64, message = "Mã khách dài từ 8 đến 64 ký tự"))]
    pub visitor_id: String,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 2, max = 30, message = "Tên hiển thị dài từ 2 đến 30 ký tự"))]
    pub display_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct UpdateVisitorDto {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 30, message = "Tên hiển thị dài từ 2 đến 30 ký tự"))]
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LevelProgressDto {
    pub level: i32,
    pub title: String,
    pub xp: i32,
    /// XP earned since reaching the current level.
    pub xp_into_level: i32,
    /// XP still needed for the next level; 0 at max level.
    pub xp_to_next_level: i32,
    pub percent: u32,
    pub next_title: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct StreakDto {
    pub current_streak: i32,
    pub longest_streak: i32,
    pub freezes_available: i32,
    pub last_check_in: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct VisitorProfileDto {
    pub visitor_id: String,
    pub display_name: String,
    pub level: LevelProgressDto,
    pub posts_read: i32,
    pub comments_count: i32,
    pub reactions_count: i32,
    pub votes_count: i32,
    pub streak: StreakDto,
    pub badges_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CheckInResultDto {
    pub already_checked_in: bool,
    pub streak: StreakDto,
    pub freezes_used: i32,
    pub freeze_earned: bool,
    pub streak_reset: bool,
    pub xp_awarded: i32,
    pub leveled_up: bool,
    pub level: LevelProgressDto,
    pub new_badges: Vec<BadgeDto>,
}
