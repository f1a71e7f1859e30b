//! Queue Producer
//!
//! Appends serialized jobs to the tail of `queue:<name>` lists. The worker
//! pops from the head. A successful push is the only delivery guarantee;
//! there is no acknowledgement.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::CreationError;
use crate::domain::JobDescriptor;
use crate::infrastructure::metrics;
use crate::infrastructure::store::{keys, KeyValueStore, StoreError};

#[derive(Clone)]
pub struct QueueProducer {
    store: Arc<dyn KeyValueStore>,
}

impl QueueProducer {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Append an already serialized job to a queue.
    #[instrument(skip(self, serialized_job), level = "debug")]
    pub async fn push(&self, queue: &str, serialized_job: &str) -> Result<(), StoreError> {
        let depth = self.store.rpush(&keys::queue(queue), serialized_job).await?;
        metrics::record_job_enqueued(queue);
        debug!(queue, depth, "Job enqueued");
        Ok(())
    }

    /// Serialize a descriptor and append it to its queue.
    pub async fn enqueue(&self, job: &JobDescriptor) -> Result<(), CreationError> {
        let wire = job.to_wire()?;
        self.push(&job.queue, &wire).await?;
        Ok(())
    }
}
