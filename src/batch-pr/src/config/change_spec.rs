//! Batch description types and validation.

use super::{FileMapping, ValidationError};
use bstr::ByteSlice;
use serde::{Deserialize, Serialize};

/// One logical change applied to every destination repository.
///
/// Missing keys deserialize to empty values so that [`ChangeSpec::validate`]
/// can report them with a precise message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeSpec {
    /// Commit message used in every destination.
    pub commit_message: String,

    /// Pull request title.
    pub subject: String,

    /// Pull request body.
    pub body: String,

    /// Where to create the pull requests, in execution order.
    pub destinations: Vec<Destination>,

    /// Files to write, as `path` or `local:target` entries.
    pub files: Vec<FileMapping>,

    /// Branch the commit is pushed to (e.g. `feature/large-scale-change`).
    pub head: String,

    /// Owner used for destinations given as a bare repository name.
    pub owner: Option<String>,
}

/// A target repository and the branch the pull request is opened against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Destination {
    /// Repository as `owner/name`, or a bare name combined with the default owner.
    pub repository: String,

    /// Base branch of the pull request (e.g. `main`).
    pub base: String,
}

impl Destination {
    /// Creates a destination.
    pub fn new(repository: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            base: base.into(),
        }
    }

    /// Splits the repository identifier into `(owner, name)`.
    ///
    /// Returns `None` when neither the identifier nor `default_owner`
    /// provide an owner, or when either part is empty.
    #[must_use]
    pub fn owner_and_name(&self, default_owner: Option<&str>) -> Option<(String, String)> {
        let (owner, name) = match self.repository.split_once('/') {
            Some((owner, name)) => (owner, name),
            None => (default_owner?, self.repository.as_str()),
        };

        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }

        Some((owner.to_string(), name.to_string()))
    }
}

impl ChangeSpec {
    /// Checks the description can be expanded into jobs.
    ///
    /// Reports the first problem found, head branch first and then each
    /// destination in declaration order.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.head.is_empty() {
            return Err(ValidationError::EmptyHead);
        }
        validate_branch_name(&self.head)?;

        for destination in &self.destinations {
            if destination
                .owner_and_name(self.owner.as_deref())
                .is_none()
            {
                return Err(ValidationError::InvalidRepository {
                    repository: destination.repository.clone(),
                });
            }

            if destination.base.is_empty() {
                return Err(ValidationError::EmptyBase {
                    repository: destination.repository.clone(),
                });
            }

            if destination.base == self.head {
                return Err(ValidationError::BaseEqualsHead {
                    repository: destination.repository.clone(),
                    branch: destination.base.clone(),
                });
            }

            validate_branch_name(&destination.base)?;
        }

        Ok(())
    }
}

fn validate_branch_name(branch: &str) -> Result<(), ValidationError> {
    if gix_validate::reference::name_partial(branch.as_bytes().as_bstr()).is_err() {
        return Err(ValidationError::InvalidBranchName {
            branch: branch.to_string(),
        });
    }
    Ok(())
}
