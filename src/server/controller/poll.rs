use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        poll::{CreatePollDto, PollDto, UpdatePollDto, VoteDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            client_identity::ClientIdentity,
            extract::{AppJson, AppPath, AppQuery},
            security::SecurityGuard,
        },
        model::{poll::CreatePollParams, security::RateAction},
        service::poll::PollService,
        state::AppState,
    },
};

/// Tag for grouping poll endpoints in OpenAPI documentation
pub static POLL_TAG: &str = "poll";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PollListParams {
    /// Only polls attached to this post
    pub post_id: Option<i32>,
}

/// List polls with vote counts and the caller's vote.
#[utoipa::path(
    get,
    path = "/api/polls",
    tag = POLL_TAG,
    params(PollListParams),
    responses(
        (status = 200, description = "Polls", body = Vec<PollDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_polls(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppQuery(params): AppQuery<PollListParams>,
) -> Result<impl IntoResponse, AppError> {
    let polls = PollService::new(&state.db)
        .list(params.post_id, &identity.ip_hash)
        .await?;

    let dtos: Vec<PollDto> = polls
        .into_iter()
        .map(|(poll, voted)| poll.into_dto(voted))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/polls/{id}",
    tag = POLL_TAG,
    params(("id" = i32, Path, description = "Poll ID")),
    responses(
        (status = 200, description = "Poll", body = PollDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_poll(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (poll, voted) = PollService::new(&state.db)
        .get(id, &identity.ip_hash)
        .await?;

    Ok((StatusCode::OK, Json(poll.into_dto(voted))))
}

/// Vote in a poll. One vote per caller.
///
/// # Returns
/// - `200 OK` - Poll with updated counts
/// - `400 Bad Request` - Poll closed or option not in poll
/// - `404 Not Found` - Poll not found
/// - `409 Conflict` - Caller already voted
#[utoipa::path(
    post,
    path = "/api/polls/vote",
    tag = POLL_TAG,
    request_body = VoteDto,
    responses(
        (status = 200, description = "Vote recorded", body = PollDto),
        (status = 400, description = "Poll closed or invalid option", body = ErrorDto),
        (status = 403, description = "Caller is banned", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 409, description = "Already voted", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn vote(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppJson(payload): AppJson<VoteDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::PollVote)
        .await?;

    let poll = PollService::new(&state.db)
        .vote(
            payload.poll_id,
            payload.option_id,
            &identity.ip_hash,
            payload.visitor_id.as_deref(),
            Utc::now(),
        )
        .await?;

    Ok((StatusCode::OK, Json(poll.into_dto(Some(payload.option_id)))))
}

#[utoipa::path(
    get,
    path = "/api/admin/polls",
    tag = POLL_TAG,
    params(PollListParams),
    responses(
        (status = 200, description = "All polls", body = Vec<PollDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_list_polls(
    State(state): State<AppState>,
    session: Session,
    AppQuery(params): AppQuery<PollListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let polls = PollService::new(&state.db).list(params.post_id, "").await?;

    let dtos: Vec<PollDto> = polls
        .into_iter()
        .map(|(poll, _)| poll.into_dto(None))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/admin/polls",
    tag = POLL_TAG,
    request_body = CreatePollDto,
    responses(
        (status = 201, description = "Created poll", body = PollDto),
        (status = 400, description = "Invalid poll", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_poll(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<CreatePollDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let poll = PollService::new(&state.db)
        .create(CreatePollParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(poll.into_dto(None))))
}

/// Close or reopen a poll.
#[utoipa::path(
    patch,
    path = "/api/admin/polls/{id}",
    tag = POLL_TAG,
    params(("id" = i32, Path, description = "Poll ID")),
    request_body = UpdatePollDto,
    responses(
        (status = 200, description = "Updated poll", body = PollDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_poll(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdatePollDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let poll = PollService::new(&state.db)
        .set_active(id, payload.active)
        .await?;

    Ok((StatusCode::OK, Json(poll.into_dto(None))))
}

#[utoipa::path(
    delete,
    path = "/api/admin/polls/{id}",
    tag = POLL_TAG,
    params(("id" = i32, Path, description = "Poll ID")),
    responses(
        (status = 204, description = "Poll deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_poll(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    PollService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
