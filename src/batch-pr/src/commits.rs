//! Commit creation and branch advancement.

use crate::client::{
    AuthorIdentity, CommitSignature, GitHost, NewCommit, RemoteCommit, RemoteRef, RemoteTree,
};
use crate::jobs::JobError;
use chrono::Utc;
use tracing::{debug, info};

/// A commit published on its branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedCommit {
    /// The branch, now pointing at `commit`.
    pub reference: RemoteRef,

    /// The new commit.
    pub commit: RemoteCommit,
}

/// Commits `tree` on top of the branch head and moves the branch to it.
///
/// The parent is the commit `reference` currently points at. The author
/// timestamp is the current time. The branch update is never forced: if the
/// branch moved since it was resolved, the update is rejected and reported
/// instead of discarding the other commits.
///
/// # Errors
///
/// Returns [`JobError::ParentLookup`], [`JobError::CommitCreation`] or
/// [`JobError::RefUpdate`] depending on which remote call failed.
pub async fn publish_commit(
    host: &dyn GitHost,
    owner: &str,
    repo: &str,
    reference: &RemoteRef,
    tree: &RemoteTree,
    author: &AuthorIdentity,
    message: &str,
) -> Result<PublishedCommit, JobError> {
    let parent = host
        .get_commit(owner, repo, &reference.sha)
        .await
        .map_err(|e| JobError::ParentLookup {
            sha: reference.sha.clone(),
            source: e,
        })?;

    let new_commit = NewCommit {
        message: message.to_string(),
        tree_sha: tree.sha.clone(),
        parents: vec![parent.sha],
        author: CommitSignature {
            name: author.name.clone(),
            email: author.email.clone(),
            date: Utc::now(),
        },
    };

    let commit = host
        .create_commit(owner, repo, &new_commit)
        .await
        .map_err(|e| JobError::CommitCreation { source: e })?;
    debug!(sha = %commit.sha, "Created commit");

    let advanced = RemoteRef {
        name: reference.name.clone(),
        sha: commit.sha.clone(),
    };
    let reference = host
        .update_ref(owner, repo, &advanced, false)
        .await
        .map_err(|e| JobError::RefUpdate {
            reference: advanced.name.clone(),
            sha: advanced.sha.clone(),
            source: e,
        })?;

    info!(branch = reference.branch_name(), sha = %commit.sha, "Published commit");
    Ok(PublishedCommit { reference, commit })
}
