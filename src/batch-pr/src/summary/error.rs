//! Batch error types.

use crate::jobs::{JobError, JobStep};
use thiserror::Error;

/// The error that stopped a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// A job failed; later destinations were not processed.
    #[error("{repository}: {source}")]
    Job {
        /// Repository in `owner/name` form.
        repository: String,
        /// Step that failed.
        step: JobStep,
        /// Underlying job error.
        #[source]
        source: JobError,
    },
}
