use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::{trimmed, trimmed_opt, validate_slug};

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PostSummaryDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub view_count: i32,
    pub reading_time: i32,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PostDetailDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown source.
    pub content: String,
    /// Markdown rendered to HTML.
    pub content_html: String,
    pub cover_image: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub featured: bool,
    pub view_count: i32,
    pub reading_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedPostsDto {
    pub posts: Vec<PostSummaryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CategoryCountDto {
    pub category: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct CreatePostDto {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 5, max = 200, message = "Tiêu đề dài từ 5 đến 200 ký tự"))]
    pub title: String,
    #[validate(
        length(min = 3, max = 200, message = "Slug dài từ 3 đến 200 ký tự"),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 500, message = "Tóm tắt tối đa 500 ký tự"))]
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 50, message = "Nội dung cần ít nhất 50 ký tự"))]
    pub content: String,
    pub cover_image: Option<String>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 50, message = "Chuyên mục dài từ 2 đến 50 ký tự"))]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
}

/// Partial update; omitted fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Default, ToSchema, Validate)]
pub struct UpdatePostDto {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 5, max = 200, message = "Tiêu đề dài từ 5 đến 200 ký tự"))]
    pub title: Option<String>,
    #[validate(
        length(min = 3, max = 200, message = "Slug dài từ 3 đến 200 ký tự"),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 500, message = "Tóm tắt tối đa 500 ký tự"))]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 50, message = "Nội dung cần ít nhất 50 ký tự"))]
    pub content: Option<String>,
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 2, max = 50, message = "Chuyên mục dài từ 2 đến 50 ký tự"))]
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}
