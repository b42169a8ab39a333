use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LeaderboardEntryDto {
    pub rank: u32,
    pub display_name: String,
    pub level: i32,
    pub level_title: String,
    /// XP earned within the requested period.
    pub xp: i64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LeaderboardDto {
    pub period: String,
    pub entries: Vec<LeaderboardEntryDto>,
    pub generated_at: DateTime<Utc>,
}
