//! Single-destination jobs.
//!
//! A job runs the four remote steps for one destination repository:
//! resolve the commit branch, build the tree, publish the commit and open
//! the pull request. A failing step ends the job; later steps are not tried.

mod error;
mod options;
mod state;

pub use error::JobError;
pub use options::JobOptions;
pub use state::{JobState, JobStep};

use crate::client::GitHost;
use crate::commits::publish_commit;
use crate::pull_requests::open_pull_request;
use crate::references::resolve_reference;
use crate::trees::build_tree;
use tracing::{debug, error, info_span, Instrument};

/// One destination's resolve, tree, commit and pull request sequence.
#[derive(Debug)]
pub struct Job {
    options: JobOptions,
    state: JobState,
}

/// Final state of a job that was attempted.
#[derive(Debug)]
pub struct JobReport {
    /// Repository in `owner/name` form.
    pub repository: String,

    /// Terminal state.
    pub state: JobState,

    /// The error that ended the job, if any.
    pub error: Option<JobError>,
}

impl JobReport {
    /// Returns the pull request URL if the job completed.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.state.url()
    }
}

impl Job {
    /// Creates a job that has not started.
    #[must_use]
    pub fn new(options: JobOptions) -> Self {
        Self {
            options,
            state: JobState::Init,
        }
    }

    /// Runs the job to a terminal state.
    pub async fn run(mut self, host: &dyn GitHost) -> JobReport {
        let span = info_span!(
            "job",
            repo = %self.options.full_name(),
            base = %self.options.base_branch,
            head = %self.options.commit_branch
        );

        let result = self.run_steps(host).instrument(span.clone()).await;
        let error = match result {
            Ok(()) => None,
            Err(e) => {
                span.in_scope(|| error!(step = %e.step(), error = %e, "Job failed"));
                self.state = JobState::Failed {
                    step: e.step(),
                    error: e.to_string(),
                };
                Some(e)
            }
        };

        JobReport {
            repository: self.options.full_name(),
            state: self.state,
            error,
        }
    }

    async fn run_steps(&mut self, host: &dyn GitHost) -> Result<(), JobError> {
        let options = &self.options;

        let reference = resolve_reference(
            host,
            &options.owner,
            &options.repo,
            &options.commit_branch,
            &options.base_branch,
        )
        .await?;
        transition(&mut self.state, JobState::RefResolved);

        let tree = build_tree(host, &options.owner, &options.repo, &reference, &options.files).await?;
        transition(&mut self.state, JobState::TreeBuilt);

        publish_commit(
            host,
            &options.owner,
            &options.repo,
            &reference,
            &tree,
            &options.author,
            &options.commit_message,
        )
        .await?;
        transition(&mut self.state, JobState::CommitPublished);

        let url = open_pull_request(host, options).await?;
        transition(&mut self.state, JobState::PrCreated { url });

        Ok(())
    }
}

fn transition(state: &mut JobState, next: JobState) {
    debug!(from = state.as_str(), to = next.as_str(), "Job state changed");
    *state = next;
}
