//! Job Encoder
//!
//! Builds worker job descriptors from chat and message snapshots.

use chrono::Utc;

use crate::domain::{Jid, JobDescriptor, JobPayload};

#[derive(Debug, Clone, Copy, Default)]
pub struct JobEncoder;

impl JobEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Build a descriptor with a fresh jid, routed by the payload variant.
    ///
    /// `created_at` and `enqueued_at` are the same instant: the job is built
    /// immediately before it is pushed.
    pub fn encode(&self, payload: impl Into<JobPayload>) -> JobDescriptor {
        let payload = payload.into();
        let now = Utc::now();

        JobDescriptor {
            class: payload.job_class().to_string(),
            queue: payload.queue().to_string(),
            args: [payload],
            retry: true,
            jid: Jid::generate(),
            created_at: now,
            enqueued_at: now,
        }
    }
}
