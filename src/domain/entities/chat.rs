//! Chat entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::rfc3339_nanos;

/// A chat allocated under an application.
///
/// `number` is unique and strictly increasing within the application and
/// is never reused. The same field set is returned to the client and
/// handed to the worker as the job argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    /// Sequence number within the application
    pub number: i64,

    /// Token of the owning application
    pub application_token: String,

    /// Creation time
    #[serde(with = "rfc3339_nanos")]
    pub timestamp: DateTime<Utc>,
}

impl Chat {
    pub fn new(number: i64, application_token: impl Into<String>) -> Self {
        Self {
            number,
            application_token: application_token.into(),
            timestamp: Utc::now(),
        }
    }
}
