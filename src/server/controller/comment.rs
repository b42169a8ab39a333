use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        comment::{
            AdminCommentDto, CommentDto, CreateCommentDto, PaginatedCommentsDto, SetApprovalDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::{
            auth::AuthGuard,
            client_identity::ClientIdentity,
            extract::{AppJson, AppPath, AppQuery},
            security::SecurityGuard,
        },
        model::{
            comment::{Comment, CreateCommentParams},
            security::RateAction,
        },
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListParams {
    pub post_id: i32,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminCommentParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "super::default_entries")]
    pub entries: u64,
    /// Only comments awaiting approval
    #[serde(default)]
    pub pending: bool,
}

#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    params(CommentListParams),
    responses(
        (status = 200, description = "Approved comments, oldest first", body = Vec<CommentDto>),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CommentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db)
        .list_for_post(params.post_id)
        .await?;

    let dtos: Vec<CommentDto> = comments.into_iter().map(Comment::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Post a comment.
///
/// Checked against bans and the comment rate limit. Depending on configuration the
/// comment is visible immediately or waits for approval.
///
/// # Returns
/// - `201 Created` - Stored comment
/// - `400 Bad Request` - Validation failed or parent on another post
/// - `403 Forbidden` - Caller is banned
/// - `404 Not Found` - Post not found
/// - `429 Too Many Requests` - Rate limited
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment stored", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 403, description = "Caller is banned", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppJson(payload): AppJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::Comment)
        .await?;

    let params = CreateCommentParams::from_dto(payload, identity.ip_hash);
    let comment = CommentService::new(&state.db)
        .create(params, state.comments_require_approval)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/comments",
    tag = COMMENT_TAG,
    params(AdminCommentParams),
    responses(
        (status = 200, description = "Comments, newest first", body = PaginatedCommentsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_list_comments(
    State(state): State<AppState>,
    session: Session,
    AppQuery(params): AppQuery<AdminCommentParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let pagination = PaginationParams {
        page: params.page,
        entries: params.entries,
    };
    let comments = CommentService::new(&state.db)
        .list_admin(params.pending, pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(comments.into_dto())))
}

/// Approve or hide a comment.
#[utoipa::path(
    patch,
    path = "/api/admin/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = SetApprovalDto,
    responses(
        (status = 200, description = "Updated comment", body = AdminCommentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_comment_approval(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<SetApprovalDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let comment = CommentService::new(&state.db)
        .set_approved(id, payload.approved)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_admin_dto())))
}

/// Delete a comment and its replies.
#[utoipa::path(
    delete,
    path = "/api/admin/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    CommentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
