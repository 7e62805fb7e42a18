//! Pull request creation.

use crate::client::{GitHost, NewPullRequest};
use crate::jobs::{JobError, JobOptions};
use tracing::info;

/// Builds the pull request a job opens: from the commit branch into the
/// destination base, editable by maintainers.
#[must_use]
pub fn new_pull_request(options: &JobOptions) -> NewPullRequest {
    NewPullRequest {
        title: options.subject.clone(),
        body: options.body.clone(),
        head: options.commit_branch.clone(),
        base: options.base_branch.clone(),
        maintainer_can_modify: true,
    }
}

/// Opens the job's pull request and returns its web URL.
///
/// No duplicate check is made; an already open pull request for the same
/// head and base is reported by the API as an error.
///
/// # Errors
///
/// Returns [`JobError::PrCreation`] if the remote call fails.
pub async fn open_pull_request(
    host: &dyn GitHost,
    options: &JobOptions,
) -> Result<String, JobError> {
    let pull_request = new_pull_request(options);
    let url = host
        .create_pull_request(&options.owner, &options.repo, &pull_request)
        .await
        .map_err(|e| JobError::PrCreation { source: e })?;

    info!(url = %url, "PR created successfully");
    Ok(url)
}
