//! Message entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::rfc3339_nanos;

/// A message allocated under a chat.
///
/// `number` is unique and strictly increasing within its
/// (application, chat) scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Sequence number within the chat
    pub number: i64,

    /// Message text (non-empty)
    pub body: String,

    /// Number of the chat the message belongs to
    pub chat_number: i64,

    /// Token of the owning application
    pub application_token: String,

    /// Creation time
    #[serde(with = "rfc3339_nanos")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(
        number: i64,
        body: impl Into<String>,
        chat_number: i64,
        application_token: impl Into<String>,
    ) -> Self {
        Self {
            number,
            body: body.into(),
            chat_number,
            application_token: application_token.into(),
            timestamp: Utc::now(),
        }
    }
}
