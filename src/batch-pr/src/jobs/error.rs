//! Per-job error types.

use super::JobStep;
use crate::client::ApiError;
use thiserror::Error;

/// Errors that abort a single job.
#[derive(Debug, Error)]
pub enum JobError {
    /// Neither the commit branch nor the base branch could be read.
    #[error("Unable to get base ref '{branch}': {source}")]
    BaseNotFound {
        branch: String,
        #[source]
        source: ApiError,
    },

    /// The commit branch could not be created from the base branch.
    #[error("Unable to create branch '{branch}': {source}")]
    RefCreation {
        branch: String,
        #[source]
        source: ApiError,
    },

    /// A local file could not be read.
    #[error("Unable to read local file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The tree could not be created.
    #[error("Unable to create the tree based on the provided files: {source}")]
    TreeCreation {
        #[source]
        source: ApiError,
    },

    /// The parent commit could not be read.
    #[error("Unable to get parent commit '{sha}': {source}")]
    ParentLookup {
        sha: String,
        #[source]
        source: ApiError,
    },

    /// The commit could not be created.
    #[error("Unable to create the commit: {source}")]
    CommitCreation {
        #[source]
        source: ApiError,
    },

    /// The branch could not be advanced to the new commit.
    #[error("Unable to advance '{reference}' to {sha}: {source}")]
    RefUpdate {
        reference: String,
        sha: String,
        #[source]
        source: ApiError,
    },

    /// The pull request could not be opened.
    #[error("Unable to create PR: {source}")]
    PrCreation {
        #[source]
        source: ApiError,
    },
}

impl JobError {
    /// Returns the step the error aborted.
    #[must_use]
    pub fn step(&self) -> JobStep {
        match self {
            Self::BaseNotFound { .. } | Self::RefCreation { .. } => JobStep::ResolveRef,
            Self::FileRead { .. } | Self::TreeCreation { .. } => JobStep::BuildTree,
            Self::ParentLookup { .. } | Self::CommitCreation { .. } | Self::RefUpdate { .. } => {
                JobStep::PublishCommit
            }
            Self::PrCreation { .. } => JobStep::OpenPullRequest,
        }
    }
}
