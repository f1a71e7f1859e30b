//! Atomic Sequencer
//!
//! Hands out per-scope sequence numbers from store counters. Uniqueness
//! and density under concurrency come entirely from the store's atomic
//! increment; there is no locking in this process.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::infrastructure::store::{KeyValueStore, StoreError};

#[derive(Clone)]
pub struct Sequencer {
    store: Arc<dyn KeyValueStore>,
}

impl Sequencer {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Allocate the next number from `counter_key`.
    ///
    /// A missing counter starts at 0, so the first allocation is 1. On error
    /// the caller cannot tell whether a number was consumed.
    #[instrument(skip(self), level = "debug")]
    pub async fn allocate(&self, counter_key: &str) -> Result<i64, StoreError> {
        let number = self.store.incr(counter_key).await?;
        debug!(counter_key, number, "Sequence number allocated");
        Ok(number)
    }

    /// Bump a count key (chat count of an application, message count of a chat).
    pub async fn bump(&self, count_key: &str) -> Result<i64, StoreError> {
        self.store.incr(count_key).await
    }

    /// Set a counter to zero, creating it if absent.
    ///
    /// This is an unconditional write: a second call resets the counter. It is
    /// only called once per chat, before any message allocation under it.
    pub async fn initialize_counter(&self, key: &str) -> Result<(), StoreError> {
        self.store.set_int(key, 0).await
    }
}
