//! Message Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::CreateMessageRequest;
use crate::application::dto::response::MessageResponse;
use crate::application::services::{MessageService, MessageServiceImpl};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the next message of a chat
pub async fn create_message(
    State(state): State<AppState>,
    Path((token, chat_number)): Path<(String, String)>,
    ValidatedJson(body): ValidatedJson<CreateMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let chat_number = parse_chat_number(&chat_number)?;

    let message_service =
        MessageServiceImpl::new(state.store.clone(), state.settings.request.timeout());

    let message = message_service
        .create_message(&token, chat_number, body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}

/// Any decimal `i64` is well formed; chats that were never created are
/// reported by the existence check.
fn parse_chat_number(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest("Invalid chat number format".into()))
}
