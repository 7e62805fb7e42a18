//! Hosting API error types.

use thiserror::Error;

/// Errors returned by a [`GitHost`](super::GitHost) call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// The API answered with something that can't be used.
    #[error("Unexpected API response: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    /// Builds an [`ApiError::Unexpected`] from a message.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}
