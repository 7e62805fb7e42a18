//! Remote git objects exchanged with the hosting API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix of every branch reference.
pub const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Returns the fully qualified reference name of a branch.
#[must_use]
pub fn branch_ref(branch: &str) -> String {
    format!("{BRANCH_REF_PREFIX}{branch}")
}

/// A branch pointer in a remote repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteRef {
    /// Fully qualified name (e.g. `refs/heads/main`).
    pub name: String,

    /// SHA of the commit the branch points at.
    pub sha: String,
}

impl RemoteRef {
    /// Creates a reference for a branch at a commit.
    pub fn branch(branch: &str, sha: impl Into<String>) -> Self {
        Self {
            name: branch_ref(branch),
            sha: sha.into(),
        }
    }

    /// Returns the short branch name.
    #[must_use]
    pub fn branch_name(&self) -> &str {
        self.name
            .strip_prefix(BRANCH_REF_PREFIX)
            .unwrap_or(&self.name)
    }
}

/// A tree created in a remote repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteTree {
    /// SHA of the tree.
    pub sha: String,
}

/// A commit read from or created in a remote repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteCommit {
    /// SHA of the commit.
    pub sha: String,

    /// SHA of the commit's tree.
    pub tree_sha: String,
}

/// Git file mode of a blob entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileMode {
    /// Regular, non-executable file.
    #[serde(rename = "100644")]
    Regular,

    /// Executable file.
    #[serde(rename = "100755")]
    Executable,
}

impl FileMode {
    /// Returns the octal mode string used by git.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "100644",
            Self::Executable => "100755",
        }
    }
}

/// A blob entry with inline content, as sent to the tree creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    /// Path inside the repository.
    pub path: String,

    /// File mode.
    pub mode: FileMode,

    /// Always `blob`.
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// File content.
    pub content: String,
}

impl TreeEntry {
    /// Creates a blob entry.
    pub fn blob(path: impl Into<String>, mode: FileMode, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode,
            kind: "blob",
            content: content.into(),
        }
    }
}

/// Name and email recorded as commit author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorIdentity {
    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,
}

/// Author signature of a new commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitSignature {
    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,

    /// Author timestamp.
    pub date: DateTime<Utc>,
}

/// A commit to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCommit {
    /// Commit message.
    pub message: String,

    /// SHA of the commit's tree.
    #[serde(rename = "tree")]
    pub tree_sha: String,

    /// SHAs of the parent commits.
    pub parents: Vec<String>,

    /// Author signature.
    pub author: CommitSignature,
}

/// A pull request to be opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPullRequest {
    /// Title.
    pub title: String,

    /// Body.
    pub body: String,

    /// Branch holding the changes.
    pub head: String,

    /// Branch the changes are merged into.
    pub base: String,

    /// Whether maintainers of the base repository may push to the head branch.
    pub maintainer_can_modify: bool,
}
