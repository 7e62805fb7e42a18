//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading a batch description.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("Failed to parse batch description '{path}': {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse batch description '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// A batch description that cannot be turned into jobs.
///
/// Raised before any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The head (commit) branch is empty.
    #[error("head branch cannot be empty")]
    EmptyHead,

    /// A destination has no base branch.
    #[error("base branch of destination repository '{repository}' is empty")]
    EmptyBase { repository: String },

    /// A destination would open a pull request from a branch into itself.
    #[error("base branch '{branch}' cannot be the same as head at repository '{repository}'")]
    BaseEqualsHead { repository: String, branch: String },

    /// A branch name is not a valid git reference name.
    #[error("'{branch}' is not a valid branch name")]
    InvalidBranchName { branch: String },

    /// A repository identifier cannot be split into owner and name.
    #[error("repository '{repository}' must be 'owner/name' or a bare name with a default owner")]
    InvalidRepository { repository: String },
}
