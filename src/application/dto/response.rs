//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{Chat, Message};

/// `{"chat": {...}}`
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub chat: Chat,
}

impl From<Chat> for ChatResponse {
    fn from(chat: Chat) -> Self {
        Self { chat }
    }
}

/// `{"message": {...}}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: Message,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self { message }
    }
}

/// `{"status": "..."}`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}
