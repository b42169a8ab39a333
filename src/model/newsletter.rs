use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::trimmed;

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct NewsletterDto {
    #[serde(deserialize_with = "trimmed")]
    #[validate(email(message = "Email không hợp lệ"))]
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SubscriberDto {
    pub id: i32,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedSubscribersDto {
    pub subscribers: Vec<SubscriberDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
