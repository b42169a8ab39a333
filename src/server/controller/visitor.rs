use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        gamification::{
            ClaimTaskResultDto, ReadResultDto, ReadingHistoryDto, ReadingProgressDto,
            TaskProgressDto, VisitorBadgeDto,
        },
        visitor::{CheckInResultDto, CreateVisitorDto, UpdateVisitorDto, VisitorProfileDto},
    },
    server::{
        error::AppError,
        middleware::{
            client_identity::ClientIdentity,
            extract::{AppJson, AppPath},
            security::SecurityGuard,
        },
        model::{
            gamification::{ReadingEntry, TaskProgress, VisitorBadge},
            security::RateAction,
            visitor::CreateVisitorParams,
        },
        service::{
            gamification::{
                badge::BadgeService, daily_task::DailyTaskService, reading::ReadingService,
                streak::StreakService,
            },
            visitor::VisitorService,
        },
        state::AppState,
        util::parse::local_date,
    },
};

/// Tag for grouping visitor endpoints in OpenAPI documentation
pub static VISITOR_TAG: &str = "visitor";

/// Create the visitor's profile, or return it when it already exists.
#[utoipa::path(
    post,
    path = "/api/visitor/profile",
    tag = VISITOR_TAG,
    request_body = CreateVisitorDto,
    responses(
        (status = 200, description = "Visitor profile", body = VisitorProfileDto),
        (status = 400, description = "Invalid visitor id", body = ErrorDto),
        (status = 403, description = "Caller is banned", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_profile(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppJson(payload): AppJson<CreateVisitorDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::VisitorActivity)
        .await?;

    let overview = VisitorService::new(&state.db)
        .get_or_create(CreateVisitorParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(overview.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/visitor/{visitor_id}",
    tag = VISITOR_TAG,
    params(("visitor_id" = String, Path, description = "Client generated visitor id")),
    responses(
        (status = 200, description = "Visitor profile", body = VisitorProfileDto),
        (status = 404, description = "Visitor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    AppPath(visitor_id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let overview = VisitorService::new(&state.db).get(&visitor_id).await?;

    Ok((StatusCode::OK, Json(overview.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/visitor/{visitor_id}",
    tag = VISITOR_TAG,
    params(("visitor_id" = String, Path, description = "Client generated visitor id")),
    request_body = UpdateVisitorDto,
    responses(
        (status = 200, description = "Updated profile", body = VisitorProfileDto),
        (status = 400, description = "Invalid display name", body = ErrorDto),
        (status = 404, description = "Visitor not found", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppPath(visitor_id): AppPath<String>,
    AppJson(payload): AppJson<UpdateVisitorDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::VisitorActivity)
        .await?;

    let overview = VisitorService::new(&state.db)
        .update_display_name(&visitor_id, &payload.display_name)
        .await?;

    Ok((StatusCode::OK, Json(overview.into_dto())))
}

/// Delete the profile together with all of its gamification data.
#[utoipa::path(
    delete,
    path = "/api/visitor/{visitor_id}",
    tag = VISITOR_TAG,
    params(("visitor_id" = String, Path, description = "Client generated visitor id")),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 404, description = "Visitor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppPath(visitor_id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::VisitorActivity)
        .await?;

    VisitorService::new(&state.db).delete(&visitor_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Daily check-in.
///
/// Extends the streak, spending freezes to bridge missed days, and grants the
/// check-in XP. A second check-in on the same local day changes nothing.
#[utoipa::path(
    post,
    path = "/api/visitor/{visitor_id}/check-in",
    tag = VISITOR_TAG,
    params(("visitor_id" = String, Path, description = "Client generated visitor id")),
    responses(
        (status = 200, description = "Check-in result", body = CheckInResultDto),
        (status = 404, description = "Visitor not found", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_in(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppPath(visitor_id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::VisitorActivity)
        .await?;

    let outcome = StreakService::new(&state.db)
        .check_in(&visitor_id, local_date(Utc::now()))
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/visitor/{visitor_id}/tasks",
    tag = VISITOR_TAG,
    params(("visitor_id" = String, Path, description = "Client generated visitor id")),
    responses(
        (status = 200, description = "Today's tasks with progress", body = Vec<TaskProgressDto>),
        (status = 404, description = "Visitor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn today_tasks(
    State(state): State<AppState>,
    AppPath(visitor_id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let tasks = DailyTaskService::new(&state.db)
        .today_tasks(&visitor_id, local_date(Utc::now()))
        .await?;

    let dtos: Vec<TaskProgressDto> = tasks.into_iter().map(TaskProgress::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Claim the XP of a task completed today.
#[utoipa::path(
    post,
    path = "/api/visitor/{visitor_id}/tasks/{task_id}/claim",
    tag = VISITOR_TAG,
    params(
        ("visitor_id" = String, Path, description = "Client generated visitor id"),
        ("task_id" = i32, Path, description = "Daily task ID")
    ),
    responses(
        (status = 200, description = "Reward granted", body = ClaimTaskResultDto),
        (status = 400, description = "Task not completed or already claimed", body = ErrorDto),
        (status = 404, description = "Visitor or task not found", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_task(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppPath((visitor_id, task_id)): AppPath<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::VisitorActivity)
        .await?;

    let outcome = DailyTaskService::new(&state.db)
        .claim(&visitor_id, task_id, local_date(Utc::now()))
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Report reading progress for a post.
#[utoipa::path(
    post,
    path = "/api/visitor/{visitor_id}/read",
    tag = VISITOR_TAG,
    params(("visitor_id" = String, Path, description = "Client generated visitor id")),
    request_body = ReadingProgressDto,
    responses(
        (status = 200, description = "Stored progress and rewards", body = ReadResultDto),
        (status = 400, description = "Invalid progress", body = ErrorDto),
        (status = 404, description = "Visitor or post not found", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_read(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppPath(visitor_id): AppPath<String>,
    AppJson(payload): AppJson<ReadingProgressDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::VisitorActivity)
        .await?;

    let outcome = ReadingService::new(&state.db)
        .record_read(&visitor_id, payload.post_id, payload.progress, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/visitor/{visitor_id}/history",
    tag = VISITOR_TAG,
    params(("visitor_id" = String, Path, description = "Client generated visitor id")),
    responses(
        (status = 200, description = "Reading history, most recent first", body = Vec<ReadingHistoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reading_history(
    State(state): State<AppState>,
    AppPath(visitor_id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let history = ReadingService::new(&state.db).history(&visitor_id).await?;

    let dtos: Vec<ReadingHistoryDto> = history.into_iter().map(ReadingEntry::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Every badge, with the date the visitor earned it if they did.
#[utoipa::path(
    get,
    path = "/api/visitor/{visitor_id}/badges",
    tag = VISITOR_TAG,
    params(("visitor_id" = String, Path, description = "Client generated visitor id")),
    responses(
        (status = 200, description = "Badges", body = Vec<VisitorBadgeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn visitor_badges(
    State(state): State<AppState>,
    AppPath(visitor_id): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let badges = BadgeService::new(&state.db)
        .list_for_visitor(&visitor_id)
        .await?;

    let dtos: Vec<VisitorBadgeDto> = badges.into_iter().map(VisitorBadge::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
