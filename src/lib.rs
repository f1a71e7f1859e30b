//! # Chat Ingest Library
//!
//! Intake service for a chat system. Clients create chats under an
//! application and messages under a chat; the service hands out gapless,
//! strictly increasing numbers per scope from Redis counters and queues a
//! job for background workers that do the persistence.
//!
//! ## Architecture
//!
//! - **Domain Layer**: chats, messages, job descriptors
//! - **Application Layer**: sequencing, scope validation, job encoding, queueing
//! - **Infrastructure Layer**: the key-value store and metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! chat_ingest/
//! +-- config/         Configuration management
//! +-- domain/         Entities and value objects
//! +-- application/    Creation services and DTOs
//! +-- infrastructure/ Store implementations, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Error types, validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer
pub mod domain;

// Application layer
pub mod application;

// Infrastructure layer
pub mod infrastructure;

// Presentation layer
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
