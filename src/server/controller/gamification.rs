use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        gamification::{
            BadgeDto, CreateBadgeDto, CreateDailyTaskDto, DailyTaskDto, UpdateBadgeDto,
            UpdateDailyTaskDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::{AppJson, AppPath},
        },
        model::gamification::{Badge, BadgeParams, DailyTask, DailyTaskParams},
        service::gamification::{badge::BadgeService, daily_task::DailyTaskService},
        state::AppState,
    },
};

/// Tag for grouping badge and daily task administration in OpenAPI documentation
pub static GAMIFICATION_TAG: &str = "gamification";

#[utoipa::path(
    get,
    path = "/api/admin/badges",
    tag = GAMIFICATION_TAG,
    responses(
        (status = 200, description = "All badges", body = Vec<BadgeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_badges(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let badges = BadgeService::new(&state.db).list().await?;
    let dtos: Vec<BadgeDto> = badges.into_iter().map(Badge::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/admin/badges",
    tag = GAMIFICATION_TAG,
    request_body = CreateBadgeDto,
    responses(
        (status = 201, description = "Created badge", body = BadgeDto),
        (status = 400, description = "Invalid badge", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Slug already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_badge(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<CreateBadgeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let badge = BadgeService::new(&state.db)
        .create(BadgeParams::from_create_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(badge.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/badges/{id}",
    tag = GAMIFICATION_TAG,
    params(("id" = i32, Path, description = "Badge ID")),
    request_body = UpdateBadgeDto,
    responses(
        (status = 200, description = "Updated badge", body = BadgeDto),
        (status = 400, description = "Invalid badge", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Badge not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_badge(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateBadgeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let badge = BadgeService::new(&state.db)
        .update(id, BadgeParams::from_update_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(badge.into_dto())))
}

/// Delete a badge. Visitors who earned it lose it.
#[utoipa::path(
    delete,
    path = "/api/admin/badges/{id}",
    tag = GAMIFICATION_TAG,
    params(("id" = i32, Path, description = "Badge ID")),
    responses(
        (status = 204, description = "Badge deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Badge not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_badge(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    BadgeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/tasks",
    tag = GAMIFICATION_TAG,
    responses(
        (status = 200, description = "All daily tasks", body = Vec<DailyTaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let tasks = DailyTaskService::new(&state.db).list().await?;
    let dtos: Vec<DailyTaskDto> = tasks.into_iter().map(DailyTask::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/admin/tasks",
    tag = GAMIFICATION_TAG,
    request_body = CreateDailyTaskDto,
    responses(
        (status = 201, description = "Created task", body = DailyTaskDto),
        (status = 400, description = "Invalid task", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Slug already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<CreateDailyTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let task = DailyTaskService::new(&state.db)
        .create(DailyTaskParams::from_create_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/tasks/{id}",
    tag = GAMIFICATION_TAG,
    params(("id" = i32, Path, description = "Daily task ID")),
    request_body = UpdateDailyTaskDto,
    responses(
        (status = 200, description = "Updated task", body = DailyTaskDto),
        (status = 400, description = "Invalid task", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateDailyTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let task = DailyTaskService::new(&state.db)
        .update(id, DailyTaskParams::from_update_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/tasks/{id}",
    tag = GAMIFICATION_TAG,
    params(("id" = i32, Path, description = "Daily task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    DailyTaskService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
