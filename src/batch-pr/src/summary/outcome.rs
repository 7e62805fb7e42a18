//! Batch outcome.

use super::BatchError;
use crate::jobs::JobReport;

/// Result of running a batch: every attempted job plus the destinations that
/// were never started.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Attempted jobs, in destination order.
    pub reports: Vec<JobReport>,

    /// Destinations skipped because an earlier job failed.
    pub not_attempted: Vec<String>,
}

impl BatchOutcome {
    /// Appends a job report.
    pub fn record(&mut self, report: JobReport) {
        self.reports.push(report);
    }

    /// Returns the URLs of the created pull requests, in destination order.
    #[must_use]
    pub fn urls(&self) -> Vec<&str> {
        self.reports.iter().filter_map(JobReport::url).collect()
    }

    /// Returns the report of the failed job, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&JobReport> {
        self.reports.iter().find(|report| report.error.is_some())
    }

    /// Returns true if every destination got a pull request.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.failure().is_none() && self.not_attempted.is_empty()
    }

    /// Splits the outcome into the created URLs and the error that stopped
    /// the batch.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Option<BatchError>) {
        let mut urls = Vec::new();
        let mut error = None;

        for report in self.reports {
            if let Some(url) = report.state.url() {
                urls.push(url.to_string());
            }
            if let (None, Some(source)) = (&error, report.error) {
                error = Some(BatchError::Job {
                    repository: report.repository,
                    step: source.step(),
                    source,
                });
            }
        }

        (urls, error)
    }
}
