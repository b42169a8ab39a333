use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No admin id stored in the session.
    ///
    /// The request came from a client that never logged in or whose session expired.
    /// Results in a 401 Unauthorized response.
    #[error("No admin in session")]
    UserNotInSession,

    /// The admin id stored in the session no longer exists.
    ///
    /// The account was removed after the session was created. Results in a 401
    /// Unauthorized response.
    #[error("Admin {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email and password did not match an admin account.
    ///
    /// Unknown email and wrong password map to the same error so responses do not
    /// reveal which admin emails exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Setup code was wrong, expired, or already used.
    #[error("Invalid or expired setup code")]
    InvalidSetupCode,

    /// Setup was attempted after an admin already exists.
    #[error("An admin account already exists")]
    AdminAlreadyExists,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `InvalidSetupCode` → 400 Bad Request
/// - `AdminAlreadyExists` → 409 Conflict
///
/// Session errors are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (StatusCode::UNAUTHORIZED, "Bạn cần đăng nhập".to_string())
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Email hoặc mật khẩu không đúng".to_string(),
            ),
            Self::InvalidSetupCode => (
                StatusCode::BAD_REQUEST,
                "Mã thiết lập không hợp lệ hoặc đã hết hạn".to_string(),
            ),
            Self::AdminAlreadyExists => (
                StatusCode::CONFLICT,
                "Tài khoản quản trị đã tồn tại".to_string(),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
