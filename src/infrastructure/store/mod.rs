//! Store Module
//!
//! Redis connection management and the key namespace shared with the
//! application registry and the queue consumer.
//!
//! # Architecture
//!
//! ```text
//! +-------------------+
//! |     Services      |
//! +-------------------+
//!          |
//!          v
//! +-------------------+
//! |  KeyValueStore    |  <-- Abstract interface
//! +-------------------+
//!       |        |
//!       v        v
//! +------------+ +---------------+
//! | RedisStore | | InMemoryStore |
//! +------------+ +---------------+
//! ```

mod memory_store;
mod store_service;

pub use memory_store::{InMemoryStore, StoreOperation};
pub use store_service::{KeyValueStore, RedisStore, StoreError};

use redis::aio::ConnectionManager;
use redis::Client;
use tracing::{info, instrument};

use crate::config::RedisSettings;

/// Creates a Redis connection manager with automatic reconnection.
///
/// The connection and the initial PING must both finish within
/// `settings.connect_timeout_secs`, so the process never serves requests
/// on an unestablished handle.
#[instrument(skip(settings), fields(url = %settings.url))]
pub async fn create_redis_client(settings: &RedisSettings) -> Result<ConnectionManager, StoreError> {
    info!("Connecting to Redis...");
    let timeout = settings.connect_timeout();

    let connect = async {
        let client = Client::open(settings.url.as_str())?;
        let mut manager = ConnectionManager::new(client).await?;
        let _pong: String = redis::cmd("PING").query_async(&mut manager).await?;
        Ok::<_, redis::RedisError>(manager)
    };

    let manager = tokio::time::timeout(timeout, connect)
        .await
        .map_err(|_| StoreError::Timeout {
            operation: "connect",
            timeout,
        })??;

    info!("Redis connection established");
    Ok(manager)
}

/// Creates a `RedisStore` from configuration settings.
pub async fn create_redis_store(settings: &RedisSettings) -> Result<RedisStore, StoreError> {
    let conn = create_redis_client(settings).await?;
    Ok(RedisStore::new(conn, settings.command_timeout()))
}

/// Key namespace.
///
/// | key | meaning |
/// |---|---|
/// | `application:<token>` | chat count; presence means the application exists |
/// | `application:<token>:last_chat_number` | chat number sequence |
/// | `application:<token>:chat:<n>` | message count; presence means the chat exists |
/// | `application:<token>:chat:<n>:last_message_number` | message number sequence |
/// | `queue:<name>` | FIFO list of serialized jobs |
pub mod keys {
    /// Prefix for application scopes
    pub const APPLICATION: &str = "application:";

    /// Prefix for worker queues
    pub const QUEUE: &str = "queue:";

    /// Chat counter of an application, also its existence marker
    #[inline]
    pub fn application(token: &str) -> String {
        format!("{}{}", APPLICATION, token)
    }

    /// Chat number sequence of an application
    #[inline]
    pub fn last_chat_number(token: &str) -> String {
        format!("{}{}:last_chat_number", APPLICATION, token)
    }

    /// Message counter of a chat, also its existence marker
    #[inline]
    pub fn chat(token: &str, chat_number: i64) -> String {
        format!("{}{}:chat:{}", APPLICATION, token, chat_number)
    }

    /// Message number sequence of a chat
    #[inline]
    pub fn last_message_number(token: &str, chat_number: i64) -> String {
        format!("{}{}:chat:{}:last_message_number", APPLICATION, token, chat_number)
    }

    /// List backing a worker queue
    #[inline]
    pub fn queue(name: &str) -> String {
        format!("{}{}", QUEUE, name)
    }

}
