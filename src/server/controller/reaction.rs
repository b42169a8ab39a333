use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        reaction::{ReactionSummaryDto, ToggleReactionDto, ToggleReactionResultDto},
    },
    server::{
        error::AppError,
        middleware::{
            client_identity::ClientIdentity,
            extract::{AppJson, AppQuery},
            security::SecurityGuard,
        },
        model::security::RateAction,
        service::reaction::ReactionService,
        state::AppState,
    },
};

/// Tag for grouping reaction endpoints in OpenAPI documentation
pub static REACTION_TAG: &str = "reaction";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReactionParams {
    pub post_id: i32,
}

/// Reaction counts of a post and the types the caller has active.
#[utoipa::path(
    get,
    path = "/api/reactions",
    tag = REACTION_TAG,
    params(ReactionParams),
    responses(
        (status = 200, description = "Reaction summary", body = ReactionSummaryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reactions(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppQuery(params): AppQuery<ReactionParams>,
) -> Result<impl IntoResponse, AppError> {
    let summary = ReactionService::new(&state.db)
        .summary(params.post_id, &identity.ip_hash)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Toggle one reaction type on a post for the caller.
#[utoipa::path(
    post,
    path = "/api/reactions",
    tag = REACTION_TAG,
    request_body = ToggleReactionDto,
    responses(
        (status = 200, description = "Reaction toggled", body = ToggleReactionResultDto),
        (status = 400, description = "Unknown reaction type", body = ErrorDto),
        (status = 403, description = "Caller is banned", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_reaction(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppJson(payload): AppJson<ToggleReactionDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::Reaction)
        .await?;

    let outcome = ReactionService::new(&state.db)
        .toggle(
            payload.post_id,
            &identity.ip_hash,
            &payload.reaction_type,
            payload.visitor_id.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}
