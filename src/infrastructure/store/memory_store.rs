//! In-Process Store
//!
//! A `KeyValueStore` held in process memory with the same per-key semantics
//! as Redis (missing keys increment from 0, `INCR` on a non-integer fails).
//! It backs the test suite and local runs without a Redis server, and can
//! inject failures and latency per operation.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::store_service::{KeyValueStore, StoreError};

/// Store operations, used to target injected faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    Incr,
    Get,
    Exists,
    Set,
    RPush,
    Ping,
}

impl StoreOperation {
    fn is_write(self) -> bool {
        matches!(self, Self::Incr | Self::Set | Self::RPush)
    }
}

#[derive(Debug, Default)]
struct State {
    strings: HashMap<String, String>,
    lists: HashMap<String, Vec<String>>,
    failing: HashSet<StoreOperation>,
    writes: u64,
}

/// Memory-backed store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    latency: Mutex<Option<Duration>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call of `operation` fail as if the store were unreachable.
    pub fn fail_on(&self, operation: StoreOperation) {
        self.state.lock().failing.insert(operation);
    }

    /// Clears all injected failures.
    pub fn heal(&self) {
        self.state.lock().failing.clear();
    }

    /// Delays every call by `latency`.
    pub fn set_latency(&self, latency: Duration) {
        *self.latency.lock() = Some(latency);
    }

    /// Number of successful write operations so far.
    pub fn write_count(&self) -> u64 {
        self.state.lock().writes
    }

    /// Snapshot of the string value at `key`.
    pub fn value(&self, key: &str) -> Option<String> {
        self.state.lock().strings.get(key).cloned()
    }

    /// Snapshot of the list at `key`, head first.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.state.lock().lists.get(key).cloned().unwrap_or_default()
    }

    /// All keys currently present, sorted.
    pub fn keys(&self) -> Vec<String> {
        let state = self.state.lock();
        let mut keys: Vec<String> = state
            .strings
            .keys()
            .chain(state.lists.keys())
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    async fn enter(&self, operation: StoreOperation) -> Result<(), StoreError> {
        let latency = *self.latency.lock();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let mut state = self.state.lock();
        if state.failing.contains(&operation) {
            return Err(StoreError::Unavailable(format!(
                "injected failure on {:?}",
                operation
            )));
        }
        if operation.is_write() {
            state.writes += 1;
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn incr(&self, key: &str) -> Result<i64, StoreError> {
        self.enter(StoreOperation::Incr).await?;
        let mut state = self.state.lock();
        let current = match state.strings.get(key) {
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                StoreError::Unavailable(format!("value at {} is not an integer", key))
            })?,
            None => 0,
        };
        let next = current.checked_add(1).ok_or_else(|| {
            StoreError::Unavailable("increment or decrement would overflow".into())
        })?;
        state.strings.insert(key.to_string(), next.to_string());
        Ok(next)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.enter(StoreOperation::Get).await?;
        Ok(self.state.lock().strings.get(key).cloned())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.enter(StoreOperation::Exists).await?;
        let state = self.state.lock();
        Ok(state.strings.contains_key(key) || state.lists.contains_key(key))
    }

    async fn set_int(&self, key: &str, value: i64) -> Result<(), StoreError> {
        self.enter(StoreOperation::Set).await?;
        self.state
            .lock()
            .strings
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn rpush(&self, key: &str, value: &str) -> Result<u64, StoreError> {
        self.enter(StoreOperation::RPush).await?;
        let mut state = self.state.lock();
        let list = state.lists.entry(key.to_string()).or_default();
        list.push(value.to_string());
        Ok(list.len() as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.enter(StoreOperation::Ping).await
    }
}
