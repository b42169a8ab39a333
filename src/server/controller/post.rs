use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        post::{
            CategoryCountDto, CreatePostDto, PaginatedPostsDto, PostDetailDto, PostSummaryDto,
            UpdatePostDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::{AppJson, AppPath, AppQuery},
        },
        model::post::{CreatePostParams, Post, PostFilter, UpdatePostParams},
        service::post::PostService,
        state::AppState,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "super::default_entries")]
    pub entries: u64,
    pub category: Option<String>,
    pub tag: Option<String>,
    /// Text searched in title and excerpt
    pub search: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// List published posts, newest first.
///
/// # Returns
/// - `200 OK` - Page of post summaries
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    params(PostListParams),
    responses(
        (status = 200, description = "Published posts", body = PaginatedPostsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_posts(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PostListParams>,
) -> Result<impl IntoResponse, AppError> {
    let pagination = PaginationParams {
        page: params.page,
        entries: params.entries,
    };
    let filter = PostFilter {
        category: non_blank(params.category),
        tag: non_blank(params.tag),
        search: non_blank(params.search),
    };

    let posts = PostService::new(&state.db)
        .list_published(filter, pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(posts.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/posts/featured",
    tag = POST_TAG,
    responses(
        (status = 200, description = "Featured posts", body = Vec<PostSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn featured_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db).featured().await?;

    let dtos: Vec<PostSummaryDto> = posts.into_iter().map(Post::into_summary_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Categories of published posts with their post counts.
#[utoipa::path(
    get,
    path = "/api/posts/categories",
    tag = POST_TAG,
    responses(
        (status = 200, description = "Categories with counts", body = Vec<CategoryCountDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = PostService::new(&state.db).categories().await?;

    let dtos: Vec<CategoryCountDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a published post by slug.
///
/// Counts a view and returns the body rendered to HTML alongside the markdown.
///
/// # Returns
/// - `200 OK` - Post detail
/// - `404 Not Found` - No published post with that slug
#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    tag = POST_TAG,
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post detail", body = PostDetailDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db).view_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(post.into_detail_dto())))
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}/related",
    tag = POST_TAG,
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Up to three posts from the same category", body = Vec<PostSummaryDto>),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn related_posts(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db).related(&slug).await?;

    let dtos: Vec<PostSummaryDto> = posts.into_iter().map(Post::into_summary_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List every post including drafts.
///
/// # Access Control
/// - Admin session required
#[utoipa::path(
    get,
    path = "/api/admin/posts",
    tag = POST_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "All posts", body = PaginatedPostsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_list_posts(
    State(state): State<AppState>,
    session: Session,
    AppQuery(params): AppQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let posts = PostService::new(&state.db)
        .list_all(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(posts.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post detail", body = PostDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_get_post(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let post = PostService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(post.into_detail_dto())))
}

/// Create a post.
///
/// Without a slug one is generated from the title. Excerpt and reading time are
/// derived from the content when omitted.
///
/// # Returns
/// - `201 Created` - Created post
/// - `400 Bad Request` - Validation failed
/// - `401 Unauthorized` - Not logged in
/// - `409 Conflict` - Requested slug already taken
#[utoipa::path(
    post,
    path = "/api/admin/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Created post", body = PostDetailDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    AppJson(payload): AppJson<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let post = PostService::new(&state.db)
        .create(CreatePostParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_detail_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post ID")),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Updated post", body = PostDetailDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;
    payload.validate()?;

    let post = PostService::new(&state.db)
        .update(id, UpdatePostParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(post.into_detail_dto())))
}

/// Delete a post with its comments, reactions, polls and reading history.
#[utoipa::path(
    delete,
    path = "/api/admin/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    PostService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
