//! Store Service
//!
//! The `KeyValueStore` trait covers the handful of single-key atomic
//! primitives the allocation flow is built on, and `RedisStore` implements
//! it over a Redis `ConnectionManager`.
//!
//! Every primitive is individually atomic in the store. Nothing here
//! composes them into a transaction.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, instrument, warn};

use crate::infrastructure::metrics;

/// Errors reported by the shared store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Store operation {operation} timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Single-key atomic operations on the shared store.
///
/// Implementations must be safe for concurrent use from many request tasks.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Atomically increments the integer at `key` and returns the new value.
    ///
    /// A missing key counts as 0, so the first call returns 1.
    async fn incr(&self, key: &str) -> Result<i64, StoreError>;

    /// Reads the string value at `key`.
    ///
    /// # Returns
    /// * `Ok(None)` - If the key does not exist (a definitive answer, not an error)
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Checks whether `key` exists.
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Unconditionally sets `key` to an integer value.
    async fn set_int(&self, key: &str, value: i64) -> Result<(), StoreError>;

    /// Appends `value` to the tail of the list at `key` and returns the new length.
    async fn rpush(&self, key: &str, value: &str) -> Result<u64, StoreError>;

    /// Round-trips a no-op command to check connectivity.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Redis-backed store.
///
/// Cloning is cheap: the `ConnectionManager` multiplexes one connection
/// and reconnects on its own.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    command_timeout: Duration,
}

impl RedisStore {
    /// Creates a store over an established connection.
    ///
    /// `command_timeout` bounds every individual command.
    pub fn new(conn: ConnectionManager, command_timeout: Duration) -> Self {
        Self {
            conn,
            command_timeout,
        }
    }

    /// Runs a command future under the per-command timeout.
    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T, StoreError>
    where
        F: std::future::Future<Output = redis::RedisResult<T>>,
    {
        let result = match tokio::time::timeout(self.command_timeout, fut).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(StoreError::Timeout {
                operation,
                timeout: self.command_timeout,
            }),
        };

        if let Err(e) = &result {
            warn!(operation, error = %e, "Store command failed");
            metrics::record_store_error(operation);
        }

        result
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    #[instrument(skip(self), level = "debug")]
    async fn incr(&self, key: &str) -> Result<i64, StoreError> {
        let mut conn = self.conn.clone();
        let value: i64 = self.bounded("incr", conn.incr(key, 1)).await?;
        debug!(key, value, "Store increment");
        Ok(value)
    }

    #[instrument(skip(self), level = "debug")]
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = self.bounded("get", conn.get(key)).await?;
        debug!(key, hit = value.is_some(), "Store get");
        Ok(value)
    }

    #[instrument(skip(self), level = "debug")]
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        let exists: bool = self.bounded("exists", conn.exists(key)).await?;
        debug!(key, exists, "Store exists check");
        Ok(exists)
    }

    #[instrument(skip(self), level = "debug")]
    async fn set_int(&self, key: &str, value: i64) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let _: () = self.bounded("set", conn.set(key, value)).await?;
        debug!(key, value, "Store set");
        Ok(())
    }

    #[instrument(skip(self, value), level = "debug")]
    async fn rpush(&self, key: &str, value: &str) -> Result<u64, StoreError> {
        let mut conn = self.conn.clone();
        let len: u64 = self.bounded("rpush", conn.rpush(key, value)).await?;
        debug!(key, len, "Store list append");
        Ok(len)
    }

    #[instrument(skip(self), level = "debug")]
    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let _pong: String = self
            .bounded("ping", redis::cmd("PING").query_async(&mut conn))
            .await?;
        Ok(())
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("command_timeout", &self.command_timeout)
            .finish_non_exhaustive()
    }
}
