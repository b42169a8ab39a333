use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::trimmed;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct StatsDto {
    pub posts_published: u64,
    pub posts_draft: u64,
    pub total_views: i64,
    pub comments_total: u64,
    pub comments_pending: u64,
    pub reactions: u64,
    pub poll_votes: u64,
    pub subscribers_active: u64,
    pub contacts_unread: u64,
    pub visitors: u64,
    pub active_bans: u64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BanDto {
    pub id: i32,
    pub ip_hash: String,
    pub reason: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedBansDto {
    pub bans: Vec<BanDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct CreateBanDto {
    #[validate(length(min = 16, max = 128, message = "Mã IP dài từ 16 đến 128 ký tự"))]
    pub ip_hash: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 3, max = 500, message = "Lý do dài từ 3 đến 500 ký tự"))]
    pub reason: String,
    /// Permanent when omitted.
    #[validate(range(min = 1, max = 87600, message = "Thời hạn từ 1 đến 87600 giờ"))]
    pub duration_hours: Option<i64>,
}
