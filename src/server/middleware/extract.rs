//! Body, query and path extractors whose rejections are `AppError`s.
//!
//! axum's own extractors answer malformed input with a plain-text 400 or 422. These
//! wrappers turn every rejection into a 400 with the usual `{ "error": ... }` body.

use axum::extract::{
    rejection::{JsonRejection, PathRejection, QueryRejection},
    FromRequest, FromRequestParts,
};

use crate::server::error::AppError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected JSON body: {}", rejection.body_text());

        let message = match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                "Yêu cầu phải có Content-Type application/json"
            }
            JsonRejection::JsonSyntaxError(_) => "Dữ liệu JSON không đúng cú pháp",
            _ => "Dữ liệu gửi lên không hợp lệ",
        };

        AppError::BadRequest(message.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());

        AppError::BadRequest("Tham số truy vấn không hợp lệ".to_string())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path parameters: {}", rejection.body_text());

        AppError::BadRequest("Đường dẫn không hợp lệ".to_string())
    }
}
