//! Chat Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::response::ChatResponse;
use crate::application::services::{ChatService, ChatServiceImpl};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the next chat of an application
pub async fn create_chat(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<(StatusCode, Json<ChatResponse>), AppError> {
    let chat_service = ChatServiceImpl::new(state.store.clone(), state.settings.request.timeout());

    let chat = chat_service.create_chat(&token).await?;

    Ok((StatusCode::CREATED, Json(ChatResponse::from(chat))))
}
