//! Worker job descriptor.
//!
//! The descriptor is the contract with the external worker pool, which
//! pops JSON objects of this shape from `queue:<name>` lists:
//!
//! ```text
//! {"class": "ChatsCreatorJob",
//!  "args": [{"number": 1, "application_token": "abc", "timestamp": "..."}],
//!  "retry": true, "queue": "chats_creation_queue",
//!  "jid": "0123456789abcdef01234567",
//!  "created_at": "...", "enqueued_at": "..."}
//! ```
//!
//! Field names are fixed by the consumer and must not change.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Chat, Message};
use crate::domain::value_objects::{rfc3339_nanos, Jid};

/// Worker class that persists chats.
pub const CHAT_CREATION_JOB_CLASS: &str = "ChatsCreatorJob";

/// Queue consumed by the chat creation worker.
pub const CHAT_CREATION_QUEUE: &str = "chats_creation_queue";

/// Worker class that persists messages.
pub const MESSAGE_CREATION_JOB_CLASS: &str = "MessageCreatorJob";

/// Queue consumed by the message creation worker.
pub const MESSAGE_CREATION_QUEUE: &str = "messages_creation_queue";

/// The single positional argument of a job, one variant per job class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum JobPayload {
    ChatCreation(Chat),
    MessageCreation(Message),
}

impl JobPayload {
    /// Worker class that handles this payload.
    pub fn job_class(&self) -> &'static str {
        match self {
            Self::ChatCreation(_) => CHAT_CREATION_JOB_CLASS,
            Self::MessageCreation(_) => MESSAGE_CREATION_JOB_CLASS,
        }
    }

    /// Queue this payload is routed to.
    pub fn queue(&self) -> &'static str {
        match self {
            Self::ChatCreation(_) => CHAT_CREATION_QUEUE,
            Self::MessageCreation(_) => MESSAGE_CREATION_QUEUE,
        }
    }
}

impl From<Chat> for JobPayload {
    fn from(chat: Chat) -> Self {
        Self::ChatCreation(chat)
    }
}

impl From<Message> for JobPayload {
    fn from(message: Message) -> Self {
        Self::MessageCreation(message)
    }
}

/// A job ready to be pushed onto a worker queue. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDescriptor {
    pub class: String,
    pub args: [JobPayload; 1],
    pub retry: bool,
    pub queue: String,
    pub jid: Jid,
    #[serde(with = "rfc3339_nanos")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "rfc3339_nanos")]
    pub enqueued_at: DateTime<Utc>,
}

impl JobDescriptor {
    /// The payload carried by this job.
    pub fn payload(&self) -> &JobPayload {
        &self.args[0]
    }

    /// Render the descriptor as the JSON string stored in the queue.
    pub fn to_wire(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
