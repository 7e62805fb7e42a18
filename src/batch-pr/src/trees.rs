//! Tree construction for the batch commit.

use crate::client::{GitHost, RemoteRef, RemoteTree, TreeEntry};
use crate::config::FileMapping;
use crate::files::load_files;
use crate::jobs::JobError;
use tracing::{debug, info};

/// Creates a tree holding `files` on top of the commit `reference` points at.
///
/// Every file becomes an inline blob entry; paths not listed keep their
/// content from the base.
///
/// # Errors
///
/// Returns [`JobError::FileRead`] if a local file can't be loaded and
/// [`JobError::TreeCreation`] if the remote call fails.
pub async fn build_tree(
    host: &dyn GitHost,
    owner: &str,
    repo: &str,
    reference: &RemoteRef,
    files: &[FileMapping],
) -> Result<RemoteTree, JobError> {
    let entries: Vec<TreeEntry> = load_files(files)
        .await?
        .into_iter()
        .map(|file| file.into_tree_entry())
        .collect();

    debug!(entries = entries.len(), base = %reference.sha, "Creating tree");

    let tree = host
        .create_tree(owner, repo, &reference.sha, &entries)
        .await
        .map_err(|e| JobError::TreeCreation { source: e })?;

    info!(sha = %tree.sha, "Created tree");
    Ok(tree)
}
