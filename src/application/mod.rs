//! Application Layer
//!
//! Contains the allocation services and data transfer objects (DTOs).
//! This layer orchestrates the flow of data between the presentation
//! layer, the domain types, and the shared store.

pub mod dto;
pub mod services;
