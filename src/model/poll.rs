use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::{trimmed, validate_poll_options};

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PollOptionDto {
    pub id: i32,
    pub text: String,
    pub vote_count: i32,
    /// Share of total votes, rounded to whole percent.
    pub percent: u32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PollDto {
    pub id: i32,
    pub post_id: Option<i32>,
    pub question: String,
    pub active: bool,
    pub ends_at: Option<DateTime<Utc>>,
    pub options: Vec<PollOptionDto>,
    pub total_votes: i32,
    pub has_voted: bool,
    pub voted_option_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct VoteDto {
    #[validate(range(min = 1, message = "Bình chọn không hợp lệ"))]
    pub poll_id: i32,
    #[validate(range(min = 1, message = "Lựa chọn không hợp lệ"))]
    pub option_id: i32,
    pub visitor_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct CreatePollDto {
    pub post_id: Option<i32>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 5, max = 300, message = "Câu hỏi dài từ 5 đến 300 ký tự"))]
    pub question: String,
    #[validate(custom(function = "validate_poll_options"))]
    pub options: Vec<String>,
    pub ends_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdatePollDto {
    pub active: bool,
}
