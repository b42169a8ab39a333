use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::{
    trimmed, trimmed_opt, validate_action_type, validate_requirement_type, validate_slug,
};

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BadgeDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub requirement_type: String,
    pub requirement_value: i32,
    pub xp_reward: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct VisitorBadgeDto {
    pub badge: BadgeDto,
    /// `None` when the badge has not been earned yet.
    pub earned_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct DailyTaskDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub action_type: String,
    pub target: i32,
    pub xp_reward: i32,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TaskProgressDto {
    pub task_id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub action_type: String,
    pub target: i32,
    pub progress: i32,
    pub completed: bool,
    pub claimed: bool,
    pub xp_reward: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ClaimTaskResultDto {
    pub task_id: i32,
    pub xp_awarded: i32,
    pub total_xp: i32,
    pub level: i32,
    pub leveled_up: bool,
    pub new_badges: Vec<BadgeDto>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct ReadingProgressDto {
    #[validate(range(min = 1, message = "Bài viết không hợp lệ"))]
    pub post_id: i32,
    #[validate(range(min = 0, max = 100, message = "Tiến độ từ 0 đến 100"))]
    pub progress: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ReadResultDto {
    pub post_id: i32,
    pub progress: i32,
    pub completed: bool,
    /// True only on the request that first crossed the completion threshold.
    pub newly_completed: bool,
    pub xp_awarded: i32,
    pub leveled_up: bool,
    pub new_badges: Vec<BadgeDto>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ReadingHistoryDto {
    pub post_id: i32,
    pub post_slug: String,
    pub post_title: String,
    pub progress: i32,
    pub completed: bool,
    pub read_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct CreateBadgeDto {
    #[validate(
        length(min = 3, max = 100, message = "Slug dài từ 3 đến 100 ký tự"),
        custom(function = "validate_slug")
    )]
    pub slug: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 100, message = "Tên dài từ 2 đến 100 ký tự"))]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(max = 500, message = "Mô tả tối đa 500 ký tự"))]
    pub description: String,
    #[validate(length(min = 1, max = 16, message = "Biểu tượng không hợp lệ"))]
    pub icon: String,
    #[validate(custom(function = "validate_requirement_type"))]
    pub requirement_type: String,
    #[validate(range(min = 1, message = "Điều kiện phải lớn hơn 0"))]
    pub requirement_value: i32,
    #[validate(range(min = 0, max = 10000, message = "XP thưởng từ 0 đến 10000"))]
    pub xp_reward: i32,
}

#[derive(Serialize, Deserialize, Clone, Default, ToSchema, Validate)]
pub struct UpdateBadgeDto {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 2, max = 100, message = "Tên dài từ 2 đến 100 ký tự"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 500, message = "Mô tả tối đa 500 ký tự"))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 16, message = "Biểu tượng không hợp lệ"))]
    pub icon: Option<String>,
    #[validate(custom(function = "validate_requirement_type"))]
    pub requirement_type: Option<String>,
    #[validate(range(min = 1, message = "Điều kiện phải lớn hơn 0"))]
    pub requirement_value: Option<i32>,
    #[validate(range(min = 0, max = 10000, message = "XP thưởng từ 0 đến 10000"))]
    pub xp_reward: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct CreateDailyTaskDto {
    #[validate(
        length(min = 3, max = 100, message = "Slug dài từ 3 đến 100 ký tự"),
        custom(function = "validate_slug")
    )]
    pub slug: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 100, message = "Tiêu đề dài từ 2 đến 100 ký tự"))]
    pub title: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(max = 500, message = "Mô tả tối đa 500 ký tự"))]
    pub description: String,
    #[validate(custom(function = "validate_action_type"))]
    pub action_type: String,
    #[validate(range(min = 1, message = "Mục tiêu phải lớn hơn 0"))]
    pub target: i32,
    #[validate(range(min = 0, max = 10000, message = "XP thưởng từ 0 đến 10000"))]
    pub xp_reward: i32,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Default, ToSchema, Validate)]
pub struct UpdateDailyTaskDto {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 2, max = 100, message = "Tiêu đề dài từ 2 đến 100 ký tự"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 500, message = "Mô tả tối đa 500 ký tự"))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_action_type"))]
    pub action_type: Option<String>,
    #[validate(range(min = 1, message = "Mục tiêu phải lớn hơn 0"))]
    pub target: Option<i32>,
    #[validate(range(min = 0, max = 10000, message = "XP thưởng từ 0 đến 10000"))]
    pub xp_reward: Option<i32>,
    pub active: Option<bool>,
}
