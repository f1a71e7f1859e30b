//! Chat Service
//!
//! Chat creation: validate the application, allocate the chat number,
//! bump the application's chat count, mark the chat as existing, and hand
//! the chat to the worker queue.
//!
//! Steps are independent single-key store operations. Once a number has
//! been allocated it stays consumed whatever happens next: a failure later
//! in the flow leaves a gap in the sequence, never a duplicate.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::{CreationError, JobEncoder, QueueProducer, ScopeValidator, Sequencer};
use crate::domain::Chat;
use crate::infrastructure::metrics;
use crate::infrastructure::store::{keys, KeyValueStore};

/// Chat service trait
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Create the next chat under an application
    async fn create_chat(&self, application_token: &str) -> Result<Chat, CreationError>;
}

/// ChatService implementation
pub struct ChatServiceImpl {
    validator: ScopeValidator,
    sequencer: Sequencer,
    encoder: JobEncoder,
    producer: QueueProducer,
    deadline: Duration,
}

impl ChatServiceImpl {
    /// `deadline` bounds the whole flow; store calls still pending when it
    /// expires are abandoned.
    pub fn new(store: Arc<dyn KeyValueStore>, deadline: Duration) -> Self {
        Self {
            validator: ScopeValidator::new(store.clone()),
            sequencer: Sequencer::new(store.clone()),
            encoder: JobEncoder::new(),
            producer: QueueProducer::new(store),
            deadline,
        }
    }

    async fn run(&self, token: &str, allocated: &mut Option<i64>) -> Result<Chat, CreationError> {
        if !self.validator.application_exists(token).await? {
            return Err(CreationError::ApplicationNotFound(token.to_string()));
        }

        let number = self.sequencer.allocate(&keys::last_chat_number(token)).await?;
        *allocated = Some(number);
        metrics::record_allocation("chat");

        self.sequencer.bump(&keys::application(token)).await?;

        self.sequencer
            .initialize_counter(&keys::chat(token, number))
            .await?;

        let chat = Chat::new(number, token);
        let job = self.encoder.encode(chat.clone());
        self.producer.enqueue(&job).await?;

        info!(token, chat_number = number, jid = %job.jid, "Chat creation job enqueued");
        Ok(chat)
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    #[instrument(skip(self))]
    async fn create_chat(&self, application_token: &str) -> Result<Chat, CreationError> {
        if application_token.trim().is_empty() {
            return Err(CreationError::InvalidInput(
                "Application token is required".into(),
            ));
        }

        let mut allocated = None;
        let result = tokio::time::timeout(self.deadline, self.run(application_token, &mut allocated))
            .await
            .unwrap_or(Err(CreationError::DeadlineExceeded(self.deadline)));

        if let (Err(e), Some(number)) = (&result, allocated) {
            warn!(
                token = application_token,
                chat_number = number,
                error = %e,
                "Chat number consumed without an enqueued job"
            );
            metrics::record_sequence_gap("chat");
        }

        result
    }
}
