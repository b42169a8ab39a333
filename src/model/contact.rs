use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::trimmed;

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct ContactDto {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 100, message = "Tên dài từ 2 đến 100 ký tự"))]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(email(message = "Email không hợp lệ"))]
    pub email: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 3, max = 200, message = "Tiêu đề dài từ 3 đến 200 ký tự"))]
    pub subject: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 10, max = 5000, message = "Nội dung dài từ 10 đến 5000 ký tự"))]
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ContactMessageDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedContactMessagesDto {
    pub messages: Vec<ContactMessageDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MarkReadDto {
    pub is_read: bool,
}
