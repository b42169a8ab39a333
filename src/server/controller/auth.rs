use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AdminDto, LoginDto, SetupDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard, client_identity::ClientIdentity, extract::AppJson,
            security::SecurityGuard, session::AuthSession,
        },
        model::security::RateAction,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Create the first admin account.
///
/// Requires the one-time code printed to the server log at startup while no admin
/// exists. The new admin is logged in right away.
///
/// # Returns
/// - `201 Created` - Admin created and logged in
/// - `400 Bad Request` - Validation failed, or setup code wrong, expired or used
/// - `409 Conflict` - An admin already exists
#[utoipa::path(
    post,
    path = "/api/auth/setup",
    tag = AUTH_TAG,
    request_body = SetupDto,
    responses(
        (status = 201, description = "Admin created", body = AdminDto),
        (status = 400, description = "Invalid input or setup code", body = ErrorDto),
        (status = 409, description = "Admin already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn setup(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<SetupDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let admin = AuthService::new(&state.db)
        .setup(
            &state.setup_codes,
            &payload.code,
            &payload.email,
            &payload.name,
            &payload.password,
        )
        .await?;

    AuthSession::new(&session).set_admin_id(admin.id).await?;

    Ok((StatusCode::CREATED, Json(admin.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AdminDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Wrong email or password", body = ErrorDto),
        (status = 403, description = "Caller is banned", body = ErrorDto),
        (status = 429, description = "Too many attempts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    identity: ClientIdentity,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::Login)
        .await?;

    let admin = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_admin_id(admin.id).await?;

    tracing::info!("Admin {} logged in", admin.email);

    Ok((StatusCode::OK, Json(admin.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Đã đăng xuất".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current admin", body = AdminDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(admin.into_dto())))
}
