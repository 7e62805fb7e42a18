//! Batch orchestration.
//!
//! A [`Batch`] owns a validated [`ChangeSpec`], expands it into one
//! [`JobOptions`] per destination and runs the jobs in destination order.

use crate::client::{AuthorIdentity, GitHost};
use crate::config::{ChangeSpec, ValidationError};
use crate::jobs::{Job, JobOptions};
use crate::summary::BatchOutcome;
use futures::stream::{FuturesOrdered, StreamExt};
use tracing::{info, warn};

/// A validated change description.
///
/// The description can't be modified once the batch is built.
#[derive(Debug, Clone)]
pub struct Batch {
    spec: ChangeSpec,
}

impl Batch {
    /// Validates `spec` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] reported by [`ChangeSpec::validate`].
    pub fn new(spec: ChangeSpec) -> Result<Self, ValidationError> {
        spec.validate()?;
        if spec.destinations.is_empty() {
            warn!("Batch description has no destinations");
        }
        Ok(Self { spec })
    }

    /// Materializes one job per destination, in destination order.
    ///
    /// Shared fields are copied into every job so that jobs never share
    /// state.
    #[must_use]
    pub fn expand(&self, author: &AuthorIdentity) -> Vec<JobOptions> {
        let default_owner = self.spec.owner.as_deref();
        self.spec
            .destinations
            .iter()
            .filter_map(|destination| {
                // Validation guarantees every destination has an owner.
                let (owner, repo) = destination.owner_and_name(default_owner)?;
                Some(JobOptions {
                    owner,
                    repo,
                    base_branch: destination.base.clone(),
                    commit_branch: self.spec.head.clone(),
                    commit_message: self.spec.commit_message.clone(),
                    subject: self.spec.subject.clone(),
                    body: self.spec.body.clone(),
                    files: self.spec.files.clone(),
                    author: author.clone(),
                })
            })
            .collect()
    }
}

/// Runs `jobs` and collects their pull request URLs.
///
/// With `concurrency <= 1` jobs run one after another. The first failing job
/// stops the batch: its error is recorded, URLs from earlier jobs are kept
/// and later jobs are never started.
///
/// With a higher `concurrency`, up to that many jobs run at once and reports
/// are consumed in destination order. Once a failure is seen no new job is
/// started, but the jobs already in flight run to completion and their
/// reports (and pull request URLs) are recorded. Only jobs that were never
/// started end up in [`BatchOutcome::not_attempted`].
pub async fn run_all(host: &dyn GitHost, jobs: Vec<JobOptions>, concurrency: usize) -> BatchOutcome {
    info!(jobs = jobs.len(), concurrency, "Running batch");

    let mut outcome = BatchOutcome::default();
    let mut pending = jobs.into_iter();
    let mut in_flight = FuturesOrdered::new();
    for options in pending.by_ref().take(concurrency.max(1)) {
        in_flight.push_back(Job::new(options).run(host));
    }

    let mut stopped = false;
    while let Some(report) = in_flight.next().await {
        stopped |= report.error.is_some();
        outcome.record(report);
        if !stopped {
            if let Some(options) = pending.next() {
                in_flight.push_back(Job::new(options).run(host));
            }
        }
    }

    outcome.not_attempted = pending.map(|options| options.full_name()).collect();
    if !outcome.not_attempted.is_empty() {
        warn!(
            skipped = outcome.not_attempted.len(),
            "Batch stopped, remaining destinations not processed"
        );
    }

    outcome
}
