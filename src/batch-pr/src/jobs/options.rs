//! Per-destination job options.

use crate::client::AuthorIdentity;
use crate::config::FileMapping;
use serde::Serialize;

/// Everything one job needs, materialized from a change description and one
/// of its destinations.
///
/// Each job owns its options; nothing in here is shared with other jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobOptions {
    /// Owner (user or organization) of the target repository.
    pub owner: String,

    /// Name of the target repository.
    pub repo: String,

    /// Branch the pull request is opened against.
    pub base_branch: String,

    /// Branch the commit is pushed to.
    pub commit_branch: String,

    /// Commit message.
    pub commit_message: String,

    /// Pull request title.
    pub subject: String,

    /// Pull request body.
    pub body: String,

    /// Files written by the commit.
    pub files: Vec<FileMapping>,

    /// Commit author.
    pub author: AuthorIdentity,
}

impl JobOptions {
    /// Returns the repository in `owner/name` form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
