//! Scope Validator
//!
//! Existence checks for application and chat scopes. A scope exists when
//! its count key is present; the value is ignored. A missing key is a
//! definitive "no", store failures propagate as errors.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::infrastructure::store::{keys, KeyValueStore, StoreError};

#[derive(Clone)]
pub struct ScopeValidator {
    store: Arc<dyn KeyValueStore>,
}

impl ScopeValidator {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Check that an application token has been registered.
    #[instrument(skip(self), level = "debug")]
    pub async fn application_exists(&self, token: &str) -> Result<bool, StoreError> {
        let present = self.store.get(&keys::application(token)).await?.is_some();
        if !present {
            debug!(token, "Application token not found");
        }
        Ok(present)
    }

    /// Check that a chat has been created under an application.
    #[instrument(skip(self), level = "debug")]
    pub async fn chat_exists(&self, token: &str, chat_number: i64) -> Result<bool, StoreError> {
        self.store.exists(&keys::chat(token, chat_number)).await
    }
}
