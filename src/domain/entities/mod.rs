//! # Domain Entities
//!
//! - **Chat**: a numbered conversation under an application token
//! - **Message**: a numbered message under a chat
//! - **JobDescriptor**: the unit of work handed to the worker queue
//!
//! Entities are ephemeral records: the authoritative counters live in the
//! shared store, and persistence is done by the external worker.

mod chat;
mod job;
mod message;

pub use chat::Chat;
pub use job::{
    JobDescriptor, JobPayload, CHAT_CREATION_JOB_CLASS, CHAT_CREATION_QUEUE,
    MESSAGE_CREATION_JOB_CLASS, MESSAGE_CREATION_QUEUE,
};
pub use message::Message;
