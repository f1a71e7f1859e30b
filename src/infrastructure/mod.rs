//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - The shared key-value store (Redis) and its key namespace
//! - Prometheus metrics

pub mod metrics;
pub mod store;
