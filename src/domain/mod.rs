//! # Domain Layer
//!
//! Chats, messages, and the worker job descriptor, independent of the
//! store and HTTP layers.
//!
//! ## Structure
//!
//! - **entities**: `Chat`, `Message`, `JobDescriptor`
//! - **value_objects**: `Jid` and the wire timestamp format

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
