//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::CreateMessageDto;

/// Create message request: `{"message": {"body": "..."}}`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(nested)]
    pub message: MessageParams,
}

/// Permitted message attributes
#[derive(Debug, Deserialize, Validate)]
pub struct MessageParams {
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
}

impl From<CreateMessageRequest> for CreateMessageDto {
    fn from(request: CreateMessageRequest) -> Self {
        Self {
            body: request.message.body,
        }
    }
}
