//! GitHub implementation of [`GitHost`] on top of octocrab.

use super::{
    branch_ref, ApiError, AuthorIdentity, GitHost, NewCommit, NewPullRequest, RemoteCommit,
    RemoteRef, RemoteTree, TreeEntry,
};
use async_trait::async_trait;
use octocrab::Octocrab;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// GitHub REST API client.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client can't be built.
    pub fn new(token: String) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder().personal_token(token).build()?;
        Ok(Self { octocrab })
    }
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    login: String,
    id: u64,
    name: Option<String>,
    email: Option<String>,
}

impl UserResponse {
    /// Falls back to the login and the no-reply address when the profile
    /// hides its name or email.
    fn into_identity(self) -> AuthorIdentity {
        let email = self
            .email
            .filter(|email| !email.is_empty())
            .unwrap_or_else(|| format!("{}+{}@users.noreply.github.com", self.id, self.login));
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or(self.login);
        AuthorIdentity { name, email }
    }
}

#[derive(Debug, Deserialize)]
struct RefResponse {
    #[serde(rename = "ref")]
    name: String,
    object: ShaObject,
}

impl From<RefResponse> for RemoteRef {
    fn from(response: RefResponse) -> Self {
        Self {
            name: response.name,
            sha: response.object.sha,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ShaObject {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct CommitResponse {
    sha: String,
    tree: ShaObject,
}

impl From<CommitResponse> for RemoteCommit {
    fn from(response: CommitResponse) -> Self {
        Self {
            sha: response.sha,
            tree_sha: response.tree.sha,
        }
    }
}

/// Characters that can't appear verbatim in a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

fn git_route(owner: &str, repo: &str, path: &str) -> String {
    format!("/repos/{owner}/{repo}/git/{path}")
}

/// Percent-encodes every `/`-separated segment of a ref name.
///
/// Branch names may contain `#`, `%` or `?`, which would otherwise cut the
/// route short.
fn ref_path(name: &str) -> String {
    name.split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[async_trait]
impl GitHost for GitHubClient {
    async fn authenticated_user(&self) -> Result<AuthorIdentity, ApiError> {
        let user: UserResponse = self.octocrab.get("/user", None::<&()>).await?;
        debug!(login = %user.login, "Resolved authenticated user");
        Ok(user.into_identity())
    }

    async fn get_ref(&self, owner: &str, repo: &str, branch: &str) -> Result<RemoteRef, ApiError> {
        let route = git_route(owner, repo, &format!("ref/heads/{}", ref_path(branch)));
        let response: RefResponse = self.octocrab.get(route, None::<&()>).await?;
        Ok(response.into())
    }

    async fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<RemoteRef, ApiError> {
        let body = json!({ "ref": branch_ref(branch), "sha": sha });
        let response: RefResponse = self
            .octocrab
            .post(git_route(owner, repo, "refs"), Some(&body))
            .await?;
        Ok(response.into())
    }

    async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        reference: &RemoteRef,
        force: bool,
    ) -> Result<RemoteRef, ApiError> {
        let body = json!({ "sha": reference.sha, "force": force });
        let response: RefResponse = self
            .octocrab
            .patch(git_route(owner, repo, &ref_path(&reference.name)), Some(&body))
            .await?;
        Ok(response.into())
    }

    async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        base_tree: &str,
        entries: &[TreeEntry],
    ) -> Result<RemoteTree, ApiError> {
        let body = json!({ "base_tree": base_tree, "tree": entries });
        let response: ShaObject = self
            .octocrab
            .post(git_route(owner, repo, "trees"), Some(&body))
            .await?;
        Ok(RemoteTree { sha: response.sha })
    }

    async fn get_commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> Result<RemoteCommit, ApiError> {
        let route = git_route(owner, repo, &format!("commits/{sha}"));
        let response: CommitResponse = self.octocrab.get(route, None::<&()>).await?;
        Ok(response.into())
    }

    async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        commit: &NewCommit,
    ) -> Result<RemoteCommit, ApiError> {
        let response: CommitResponse = self
            .octocrab
            .post(git_route(owner, repo, "commits"), Some(commit))
            .await?;
        Ok(response.into())
    }

    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_request: &NewPullRequest,
    ) -> Result<String, ApiError> {
        let pr = self
            .octocrab
            .pulls(owner, repo)
            .create(
                &pull_request.title,
                &pull_request.head,
                &pull_request.base,
            )
            .body(&pull_request.body)
            .maintainer_can_modify(pull_request.maintainer_can_modify)
            .send()
            .await?;

        let url = pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_else(|| format!("https://github.com/{owner}/{repo}/pull/{}", pr.number));

        Ok(url)
    }
}
