//! Worker job identifier.
//!
//! A job id ("jid") is 12 random bytes rendered as 24 lowercase hex
//! characters, the format the queue consumer uses for its own jobs.
//! Bytes come from the thread-local CSPRNG. Collisions are not guarded
//! against beyond the size of the id space.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of random bytes in a job id.
pub const JID_BYTES: usize = 12;

/// A unique job id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jid(String);

impl Jid {
    /// Generate a fresh job id.
    pub fn generate() -> Self {
        let bytes: [u8; JID_BYTES] = rand::random();
        Self(hex::encode(bytes))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that a string has the shape of a job id.
    pub fn is_valid(value: &str) -> bool {
        value.len() == JID_BYTES * 2
            && value
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
