//! HTTP API
//!
//! REST endpoints for chat and message creation.

pub mod extractors;
pub mod handlers;
pub mod routes;
