use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        newsletter::{NewsletterDto, SubscriberDto},
    },
    server::{
        error::AppError,
        middleware::{
            client_identity::ClientIdentity, extract::AppJson, security::SecurityGuard,
        },
        model::security::RateAction,
        service::newsletter::NewsletterService,
        state::AppState,
    },
};

/// Tag for grouping newsletter endpoints in OpenAPI documentation
pub static NEWSLETTER_TAG: &str = "newsletter";

/// Subscribe an email. Subscribing twice is harmless and reactivates a
/// previously unsubscribed address.
#[utoipa::path(
    post,
    path = "/api/newsletter/subscribe",
    tag = NEWSLETTER_TAG,
    request_body = NewsletterDto,
    responses(
        (status = 200, description = "Subscribed", body = SubscriberDto),
        (status = 400, description = "Invalid email", body = ErrorDto),
        (status = 403, description = "Caller is banned", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppJson(payload): AppJson<NewsletterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::Newsletter)
        .await?;

    let subscriber = NewsletterService::new(&state.db)
        .subscribe(&payload.email)
        .await?;

    Ok((StatusCode::OK, Json(subscriber.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/newsletter/unsubscribe",
    tag = NEWSLETTER_TAG,
    request_body = NewsletterDto,
    responses(
        (status = 200, description = "Unsubscribed", body = SubscriberDto),
        (status = 400, description = "Invalid email", body = ErrorDto),
        (status = 404, description = "Email not subscribed", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppJson(payload): AppJson<NewsletterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::Newsletter)
        .await?;

    let subscriber = NewsletterService::new(&state.db)
        .unsubscribe(&payload.email)
        .await?;

    Ok((StatusCode::OK, Json(subscriber.into_dto())))
}
