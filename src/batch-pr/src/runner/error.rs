//! Runner error types.

use crate::client::ApiError;
use crate::config::{ConfigError, ValidationError};

/// Errors that stop a run before any job starts.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The batch description could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The batch description is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No token was supplied.
    #[error("GITHUB_AUTH_TOKEN not set")]
    MissingToken,

    /// The token was rejected when resolving the author identity.
    #[error("Unable to resolve the authenticated user: {0}")]
    Auth(#[source] ApiError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
