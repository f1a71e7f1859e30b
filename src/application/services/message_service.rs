//! Message Service
//!
//! Message creation under an existing chat. Both the application and the
//! chat are validated before a message number is allocated, so requests
//! rejected as "not found" never consume a number.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::{CreationError, JobEncoder, QueueProducer, ScopeValidator, Sequencer};
use crate::domain::Message;
use crate::infrastructure::metrics;
use crate::infrastructure::store::{keys, KeyValueStore};

/// Message service trait
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Create the next message in a chat
    async fn create_message(
        &self,
        application_token: &str,
        chat_number: i64,
        request: CreateMessageDto,
    ) -> Result<Message, CreationError>;
}

/// Create message request
#[derive(Debug, Clone)]
pub struct CreateMessageDto {
    pub body: String,
}

/// MessageService implementation
pub struct MessageServiceImpl {
    validator: ScopeValidator,
    sequencer: Sequencer,
    encoder: JobEncoder,
    producer: QueueProducer,
    deadline: Duration,
}

impl MessageServiceImpl {
    pub fn new(store: Arc<dyn KeyValueStore>, deadline: Duration) -> Self {
        Self {
            validator: ScopeValidator::new(store.clone()),
            sequencer: Sequencer::new(store.clone()),
            encoder: JobEncoder::new(),
            producer: QueueProducer::new(store),
            deadline,
        }
    }

    fn check_input(token: &str, body: &str) -> Result<(), CreationError> {
        if token.trim().is_empty() {
            return Err(CreationError::InvalidInput(
                "Application token is required".into(),
            ));
        }
        if body.is_empty() {
            return Err(CreationError::InvalidInput(
                "Invalid request body: body is required".into(),
            ));
        }
        Ok(())
    }

    async fn run(
        &self,
        token: &str,
        chat_number: i64,
        body: String,
        allocated: &mut Option<i64>,
    ) -> Result<Message, CreationError> {
        if !self.validator.application_exists(token).await? {
            return Err(CreationError::ApplicationNotFound(token.to_string()));
        }
        if !self.validator.chat_exists(token, chat_number).await? {
            return Err(CreationError::ChatNotFound {
                token: token.to_string(),
                chat_number,
            });
        }

        let number = self
            .sequencer
            .allocate(&keys::last_message_number(token, chat_number))
            .await?;
        *allocated = Some(number);
        metrics::record_allocation("message");

        self.sequencer.bump(&keys::chat(token, chat_number)).await?;

        let message = Message::new(number, body, chat_number, token);
        let job = self.encoder.encode(message.clone());
        self.producer.enqueue(&job).await?;

        info!(
            token,
            chat_number,
            message_number = number,
            jid = %job.jid,
            "Message creation job enqueued"
        );
        Ok(message)
    }
}

#[async_trait]
impl MessageService for MessageServiceImpl {
    #[instrument(skip(self, request), fields(body_len = request.body.len()))]
    async fn create_message(
        &self,
        application_token: &str,
        chat_number: i64,
        request: CreateMessageDto,
    ) -> Result<Message, CreationError> {
        Self::check_input(application_token, &request.body)?;

        let mut allocated = None;
        let result = tokio::time::timeout(
            self.deadline,
            self.run(application_token, chat_number, request.body, &mut allocated),
        )
        .await
        .unwrap_or(Err(CreationError::DeadlineExceeded(self.deadline)));

        if let (Err(e), Some(number)) = (&result, allocated) {
            warn!(
                token = application_token,
                chat_number,
                message_number = number,
                error = %e,
                "Message number consumed without an enqueued job"
            );
            metrics::record_sequence_gap("message");
        }

        result
    }
}
