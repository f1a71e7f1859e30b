//! Application Services
//!
//! The allocation core and the two creation flows built on it.
//!
//! ## Components
//!
//! - **Sequencer**: per-scope sequence numbers from atomic store counters
//! - **ScopeValidator**: application and chat existence checks
//! - **JobEncoder**: worker job descriptors
//! - **QueueProducer**: appends jobs to worker queues
//!
//! ## Flows
//!
//! - **ChatService**: validate → allocate → bump counters → encode → enqueue
//! - **MessageService**: same, scoped to an existing chat

pub mod chat_service;
pub mod errors;
pub mod job_encoder;
pub mod message_service;
pub mod queue_producer;
pub mod scope_validator;
pub mod sequencer;

pub use chat_service::{ChatService, ChatServiceImpl};
pub use errors::CreationError;
pub use job_encoder::JobEncoder;
pub use message_service::{CreateMessageDto, MessageService, MessageServiceImpl};
pub use queue_producer::QueueProducer;
pub use scope_validator::ScopeValidator;
pub use sequencer::Sequencer;
