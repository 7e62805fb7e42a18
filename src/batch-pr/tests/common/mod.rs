//! In-memory hosting API used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use batch_pr::{
    ApiError, AuthorIdentity, GitHost, NewCommit, NewPullRequest, RemoteCommit, RemoteRef,
    RemoteTree, TreeEntry,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A remote operation, used to inject failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    AuthenticatedUser,
    GetRef,
    CreateRef,
    UpdateRef,
    CreateTree,
    GetCommit,
    CreateCommit,
    CreatePullRequest,
}

/// A recorded remote call. Repositories are in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AuthenticatedUser,
    GetRef {
        repo: String,
        branch: String,
    },
    CreateRef {
        repo: String,
        branch: String,
        sha: String,
    },
    UpdateRef {
        repo: String,
        reference: String,
        sha: String,
        force: bool,
    },
    CreateTree {
        repo: String,
        base_tree: String,
        entries: Vec<TreeEntry>,
    },
    GetCommit {
        repo: String,
        sha: String,
    },
    CreateCommit {
        repo: String,
        commit: NewCommit,
    },
    CreatePullRequest {
        repo: String,
        pull_request: NewPullRequest,
    },
}

impl Call {
    pub fn repo(&self) -> Option<&str> {
        match self {
            Self::AuthenticatedUser => None,
            Self::GetRef { repo, .. }
            | Self::CreateRef { repo, .. }
            | Self::UpdateRef { repo, .. }
            | Self::CreateTree { repo, .. }
            | Self::GetCommit { repo, .. }
            | Self::CreateCommit { repo, .. }
            | Self::CreatePullRequest { repo, .. } => Some(repo),
        }
    }

    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Self::CreateRef { .. }
                | Self::UpdateRef { .. }
                | Self::CreateTree { .. }
                | Self::CreateCommit { .. }
                | Self::CreatePullRequest { .. }
        )
    }
}

#[derive(Default)]
struct State {
    branches: HashMap<(String, String), String>,
    parents: HashMap<String, String>,
    failures: HashMap<(String, Op), String>,
    races: HashMap<String, (String, String)>,
    calls: Vec<Call>,
    next_id: u64,
}

impl State {
    fn fail_if_configured(&self, repo: &str, op: Op) -> Result<(), ApiError> {
        match self.failures.get(&(repo.to_string(), op)) {
            Some(message) => Err(ApiError::unexpected(message.clone())),
            None => Ok(()),
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Recording fake of the GitHub git data and pulls API.
///
/// Branch updates are only accepted as fast-forwards unless forced.
#[derive(Clone, Default)]
pub struct FakeHost {
    state: Arc<Mutex<State>>,
    user_fails: bool,
}

fn key(owner: &str, repo: &str) -> String {
    format!("{owner}/{repo}")
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `branch` in `repo` at `sha`.
    pub fn with_branch(self, repo: &str, branch: &str, sha: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .branches
            .insert((repo.to_string(), branch.to_string()), sha.to_string());
        self
    }

    /// Makes every `op` call on `repo` fail.
    pub fn failing(self, repo: &str, op: Op, message: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert((repo.to_string(), op), message.to_string());
        self
    }

    /// Makes the authenticated user lookup fail.
    pub fn with_rejected_token(mut self) -> Self {
        self.user_fails = true;
        self
    }

    /// Moves `branch` to `sha` as soon as a commit is created in `repo`, as
    /// if someone else pushed in between.
    pub fn racing(self, repo: &str, branch: &str, sha: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .races
            .insert(repo.to_string(), (branch.to_string(), sha.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn calls_for(&self, repo: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.repo() == Some(repo))
            .collect()
    }

    pub fn branch_sha(&self, repo: &str, branch: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .branches
            .get(&(repo.to_string(), branch.to_string()))
            .cloned()
    }
}

#[async_trait]
impl GitHost for FakeHost {
    async fn authenticated_user(&self) -> Result<AuthorIdentity, ApiError> {
        self.state.lock().unwrap().calls.push(Call::AuthenticatedUser);
        if self.user_fails {
            return Err(ApiError::unexpected("Bad credentials"));
        }
        Ok(AuthorIdentity {
            name: "Octo Cat".to_string(),
            email: "octo@example.com".to_string(),
        })
    }

    async fn get_ref(&self, owner: &str, repo: &str, branch: &str) -> Result<RemoteRef, ApiError> {
        let repo = key(owner, repo);
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::GetRef {
            repo: repo.clone(),
            branch: branch.to_string(),
        });
        state.fail_if_configured(&repo, Op::GetRef)?;

        state
            .branches
            .get(&(repo, branch.to_string()))
            .map(|sha| RemoteRef::branch(branch, sha.clone()))
            .ok_or_else(|| ApiError::unexpected("Not Found"))
    }

    async fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<RemoteRef, ApiError> {
        let repo = key(owner, repo);
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateRef {
            repo: repo.clone(),
            branch: branch.to_string(),
            sha: sha.to_string(),
        });
        state.fail_if_configured(&repo, Op::CreateRef)?;

        let slot = (repo, branch.to_string());
        if state.branches.contains_key(&slot) {
            return Err(ApiError::unexpected("Reference already exists"));
        }
        state.branches.insert(slot, sha.to_string());
        Ok(RemoteRef::branch(branch, sha))
    }

    async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        reference: &RemoteRef,
        force: bool,
    ) -> Result<RemoteRef, ApiError> {
        let repo = key(owner, repo);
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::UpdateRef {
            repo: repo.clone(),
            reference: reference.name.clone(),
            sha: reference.sha.clone(),
            force,
        });
        state.fail_if_configured(&repo, Op::UpdateRef)?;

        let slot = (repo, reference.branch_name().to_string());
        let current = state
            .branches
            .get(&slot)
            .cloned()
            .ok_or_else(|| ApiError::unexpected("Reference does not exist"))?;
        let fast_forward = state.parents.get(&reference.sha) == Some(&current);
        if !fast_forward && !force {
            return Err(ApiError::unexpected("Update is not a fast forward"));
        }

        state.branches.insert(slot, reference.sha.clone());
        Ok(reference.clone())
    }

    async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        base_tree: &str,
        entries: &[TreeEntry],
    ) -> Result<RemoteTree, ApiError> {
        let repo = key(owner, repo);
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateTree {
            repo: repo.clone(),
            base_tree: base_tree.to_string(),
            entries: entries.to_vec(),
        });
        state.fail_if_configured(&repo, Op::CreateTree)?;

        let id = state.next_id();
        Ok(RemoteTree {
            sha: format!("tree-{id}"),
        })
    }

    async fn get_commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> Result<RemoteCommit, ApiError> {
        let repo = key(owner, repo);
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::GetCommit {
            repo: repo.clone(),
            sha: sha.to_string(),
        });
        state.fail_if_configured(&repo, Op::GetCommit)?;

        Ok(RemoteCommit {
            sha: sha.to_string(),
            tree_sha: format!("tree-of-{sha}"),
        })
    }

    async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        commit: &NewCommit,
    ) -> Result<RemoteCommit, ApiError> {
        let repo = key(owner, repo);
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateCommit {
            repo: repo.clone(),
            commit: commit.clone(),
        });
        state.fail_if_configured(&repo, Op::CreateCommit)?;

        let id = state.next_id();
        let sha = format!("commit-{id}");
        if let Some(parent) = commit.parents.first() {
            state.parents.insert(sha.clone(), parent.clone());
        }
        if let Some((branch, racing_sha)) = state.races.remove(&repo) {
            state.branches.insert((repo, branch), racing_sha);
        }

        Ok(RemoteCommit {
            sha,
            tree_sha: commit.tree_sha.clone(),
        })
    }

    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_request: &NewPullRequest,
    ) -> Result<String, ApiError> {
        let repo = key(owner, repo);
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreatePullRequest {
            repo: repo.clone(),
            pull_request: pull_request.clone(),
        });
        state.fail_if_configured(&repo, Op::CreatePullRequest)?;

        let id = state.next_id();
        Ok(format!("https://github.com/{repo}/pull/{id}"))
    }
}
