use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        admin::{BanDto, CreateBanDto, PaginatedBansDto, StatsDto},
        api::ErrorDto,
        contact::{MarkReadDto, PaginatedContactMessagesDto},
        newsletter::PaginatedSubscribersDto,
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::{AppJson, AppPath, AppQuery},
        },
        model::security::CreateBanParams,
        service::{
            admin::stats::StatsService, contact::ContactService, newsletter::NewsletterService,
            security::SecurityService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin back-office endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "super::default_entries")]
    pub entries: u64,
    /// Only messages not yet marked as read
    #[serde(default)]
    pub unread: bool,
}

/// Dashboard counters.
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Site statistics", body = StatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let stats = StatsService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/bans",
    tag = ADMIN_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Bans, newest first", body = PaginatedBansDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_bans(
    State(state): State<AppState>,
    session: Session,
    AppQuery(params): AppQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let bans = SecurityService::new(&state.db)
        .list_bans(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(bans.into_dto())))
}

/// Ban an ipHash, permanently or for a number of hours.
///
/// Banning an ipHash that is already banned replaces the previous ban.
#[utoipa::path(
    post,
    path = "/api/admin/bans",
    tag = ADMIN_TAG,
    request_body = CreateBanDto,
    responses(
        (status = 201, description = "Ban created", body = BanDto),
        (status = 400, description = "Invalid ban", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ban(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<CreateBanDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let ban = SecurityService::new(&state.db)
        .ban(CreateBanParams::from_dto(payload), Utc::now())
        .await?;

    tracing::info!("Admin {} banned ipHash {}", admin.email, ban.ip_hash);

    Ok((StatusCode::CREATED, Json(ban.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/bans/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Ban ID")),
    responses(
        (status = 204, description = "Ban lifted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Ban not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ban(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    SecurityService::new(&state.db).unban(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    tag = ADMIN_TAG,
    params(ContactListParams),
    responses(
        (status = 200, description = "Contact messages, newest first", body = PaginatedContactMessagesDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_contacts(
    State(state): State<AppState>,
    session: Session,
    AppQuery(params): AppQuery<ContactListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let pagination = PaginationParams {
        page: params.page,
        entries: params.entries,
    };
    let messages = ContactService::new(&state.db)
        .list(params.unread, pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(messages.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/admin/contacts/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Contact message ID")),
    request_body = MarkReadDto,
    responses(
        (status = 204, description = "Read flag updated"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_contact_read(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<MarkReadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    ContactService::new(&state.db)
        .set_read(id, payload.is_read)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/admin/contacts/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Contact message ID")),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    ContactService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/newsletter",
    tag = ADMIN_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Subscribers, newest first", body = PaginatedSubscribersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_subscribers(
    State(state): State<AppState>,
    session: Session,
    AppQuery(params): AppQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let subscribers = NewsletterService::new(&state.db)
        .list(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(subscribers.into_dto())))
}
