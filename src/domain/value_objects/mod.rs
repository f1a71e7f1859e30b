//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **Jid**: 24-hex-character worker job id
//! - **rfc3339_nanos**: the wire format for every timestamp

mod jid;
mod timestamp;

pub use jid::*;
pub use timestamp::*;
