use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::{trimmed, trimmed_opt};

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub author_name: String,
    pub content: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Comment as seen by moderators, including contact details and the ip hash.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AdminCommentDto {
    pub id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub visitor_id: Option<String>,
    pub author_name: String,
    pub author_email: Option<String>,
    pub content: String,
    pub ip_hash: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedCommentsDto {
    pub comments: Vec<AdminCommentDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct CreateCommentDto {
    #[validate(range(min = 1, message = "Bài viết không hợp lệ"))]
    pub post_id: i32,
    pub parent_id: Option<i32>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 50, message = "Tên dài từ 2 đến 50 ký tự"))]
    pub author_name: String,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(email(message = "Email không hợp lệ"))]
    pub author_email: Option<String>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 3, max = 2000, message = "Bình luận dài từ 3 đến 2000 ký tự"))]
    pub content: String,
    /// Gamification profile credited for the comment, if any.
    pub visitor_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SetApprovalDto {
    pub approved: bool,
}
