//! Hosting API seam.
//!
//! [`GitHost`] lists the only remote operations a batch needs. The
//! [`GitHubClient`] implementation talks to the GitHub REST API through
//! octocrab; tests substitute their own implementations.

mod error;
mod github;
mod types;

pub use error::ApiError;
pub use github::GitHubClient;
pub use types::{
    branch_ref, AuthorIdentity, CommitSignature, FileMode, NewCommit, NewPullRequest, RemoteCommit,
    RemoteRef, RemoteTree, TreeEntry, BRANCH_REF_PREFIX,
};

use async_trait::async_trait;

/// Remote operations consumed from the hosting API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitHost: Send + Sync {
    /// Reads the identity of the user owning the credential.
    async fn authenticated_user(&self) -> Result<AuthorIdentity, ApiError>;

    /// Reads the reference of `branch`.
    async fn get_ref(&self, owner: &str, repo: &str, branch: &str) -> Result<RemoteRef, ApiError>;

    /// Creates `refs/heads/<branch>` pointing at `sha`.
    async fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<RemoteRef, ApiError>;

    /// Moves `reference` to its `sha`. With `force == false` the update is
    /// rejected unless it is a fast-forward.
    async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        reference: &RemoteRef,
        force: bool,
    ) -> Result<RemoteRef, ApiError>;

    /// Creates a tree from `entries` on top of `base_tree`.
    async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        base_tree: &str,
        entries: &[TreeEntry],
    ) -> Result<RemoteTree, ApiError>;

    /// Reads a commit.
    async fn get_commit(&self, owner: &str, repo: &str, sha: &str)
        -> Result<RemoteCommit, ApiError>;

    /// Creates a commit object.
    async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        commit: &NewCommit,
    ) -> Result<RemoteCommit, ApiError>;

    /// Opens a pull request and returns its web URL.
    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_request: &NewPullRequest,
    ) -> Result<String, ApiError>;
}
