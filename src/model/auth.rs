use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::validation::trimmed;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AdminDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct LoginDto {
    #[serde(deserialize_with = "trimmed")]
    #[validate(email(message = "Email không hợp lệ"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "Mật khẩu dài từ 8 đến 128 ký tự"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema, Validate)]
pub struct SetupDto {
    #[validate(length(equal = 32, message = "Mã thiết lập không hợp lệ"))]
    pub code: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(email(message = "Email không hợp lệ"))]
    pub email: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 100, message = "Tên dài từ 2 đến 100 ký tự"))]
    pub name: String,
    #[validate(length(min = 8, max = 128, message = "Mật khẩu dài từ 8 đến 128 ký tự"))]
    pub password: String,
}
