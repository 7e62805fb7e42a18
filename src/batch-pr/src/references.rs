//! Commit branch resolution.

use crate::client::{GitHost, RemoteRef};
use crate::jobs::JobError;
use tracing::{debug, info};

/// Returns the reference of `branch`, creating it from `base` if needed.
///
/// An existing branch is returned unchanged, so re-running a batch reuses the
/// branch created by an earlier run. Any error while reading `branch` is
/// taken to mean it doesn't exist: a transient failure also leads to a
/// creation attempt, which then fails on its own if the branch is there.
///
/// # Errors
///
/// Returns [`JobError::BaseNotFound`] if `base` can't be read and
/// [`JobError::RefCreation`] if the new branch can't be created.
pub async fn resolve_reference(
    host: &dyn GitHost,
    owner: &str,
    repo: &str,
    branch: &str,
    base: &str,
) -> Result<RemoteRef, JobError> {
    match host.get_ref(owner, repo, branch).await {
        Ok(reference) => {
            debug!(branch, sha = %reference.sha, "Reusing existing branch");
            return Ok(reference);
        }
        Err(e) => {
            debug!(branch, error = %e, "Branch lookup failed, creating it");
        }
    }

    let base_ref =
        host.get_ref(owner, repo, base)
            .await
            .map_err(|e| JobError::BaseNotFound {
                branch: base.to_string(),
                source: e,
            })?;

    let reference = host
        .create_ref(owner, repo, branch, &base_ref.sha)
        .await
        .map_err(|e| JobError::RefCreation {
            branch: branch.to_string(),
            source: e,
        })?;

    info!(branch, base, sha = %reference.sha, "Created branch");
    Ok(reference)
}
