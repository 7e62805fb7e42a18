//! Job lifecycle types.

use serde::Serialize;
use std::fmt;

/// One of the four remote steps of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStep {
    /// Find or create the commit branch.
    ResolveRef,
    /// Load files and create the tree.
    BuildTree,
    /// Create the commit and advance the branch.
    PublishCommit,
    /// Open the pull request.
    OpenPullRequest,
}

impl JobStep {
    /// Returns the step as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResolveRef => "resolve_ref",
            Self::BuildTree => "build_tree",
            Self::PublishCommit => "publish_commit",
            Self::OpenPullRequest => "open_pull_request",
        }
    }
}

impl fmt::Display for JobStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of a job.
///
/// `Init -> RefResolved -> TreeBuilt -> CommitPublished -> PrCreated`, with
/// any step able to move to `Failed`. `PrCreated` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobState {
    /// Nothing attempted yet.
    Init,

    /// The commit branch exists.
    RefResolved,

    /// The tree holding the files exists.
    TreeBuilt,

    /// The commit exists and the branch points at it.
    CommitPublished,

    /// The pull request is open.
    PrCreated {
        /// Pull request web URL.
        url: String,
    },

    /// A step failed; later steps were not attempted.
    Failed {
        /// Step that failed.
        step: JobStep,
        /// Error message.
        error: String,
    },
}

impl JobState {
    /// Returns the state as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::RefResolved => "ref_resolved",
            Self::TreeBuilt => "tree_built",
            Self::CommitPublished => "commit_published",
            Self::PrCreated { .. } => "pr_created",
            Self::Failed { .. } => "failed",
        }
    }

    /// Returns true for `PrCreated` and `Failed`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::PrCreated { .. } | Self::Failed { .. })
    }

    /// Returns the pull request URL if the job completed.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::PrCreated { url } => Some(url),
            _ => None,
        }
    }
}
