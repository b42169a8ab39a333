use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        contact::ContactDto,
    },
    server::{
        error::AppError,
        middleware::{
            client_identity::ClientIdentity, extract::AppJson, security::SecurityGuard,
        },
        model::{contact::CreateContactParams, security::RateAction},
        service::contact::ContactService,
        state::AppState,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// Send a message to the site owner.
///
/// # Returns
/// - `201 Created` - Message stored for the admin inbox
/// - `400 Bad Request` - Validation failed
/// - `403 Forbidden` - Caller is banned
/// - `429 Too Many Requests` - Rate limited
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = CONTACT_TAG,
    request_body = ContactDto,
    responses(
        (status = 201, description = "Message received", body = MessageDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 403, description = "Caller is banned", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    identity: ClientIdentity,
    AppJson(payload): AppJson<ContactDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    SecurityGuard::new(&state.db)
        .check(&identity, RateAction::Contact)
        .await?;

    ContactService::new(&state.db)
        .submit(CreateContactParams::from_dto(payload, identity.ip_hash))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Cảm ơn bạn đã liên hệ! Chúng tôi sẽ phản hồi sớm.".to_string(),
        }),
    ))
}
