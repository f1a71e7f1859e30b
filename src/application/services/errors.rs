//! Creation errors shared by the chat and message flows.

use std::time::Duration;

use crate::infrastructure::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum CreationError {
    /// Malformed token, chat number or body. Raised before any store call.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Application with token {0} not found")]
    ApplicationNotFound(String),

    #[error("Chat {chat_number} not found for application {token}")]
    ChatNotFound { token: String, chat_number: i64 },

    #[error("Store failure: {0}")]
    Store(#[from] StoreError),

    #[error("Job serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Request deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
}

impl CreationError {
    /// Store, serialization and deadline failures. These surface as a generic
    /// server error and are never retried.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::Store(_) | Self::Serialization(_) | Self::DeadlineExceeded(_)
        )
    }
}
