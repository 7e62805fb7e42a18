#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod batch;
pub mod client;
pub mod commits;
pub mod config;
pub mod files;
pub mod jobs;
pub mod pull_requests;
pub mod references;
pub mod runner;
pub mod summary;
pub mod trees;

pub use batch::{run_all, Batch};
pub use client::{
    ApiError, AuthorIdentity, FileMode, GitHost, GitHubClient, NewCommit, NewPullRequest,
    RemoteCommit, RemoteRef, RemoteTree, TreeEntry,
};
pub use commits::{publish_commit, PublishedCommit};
pub use config::{
    load_change_spec, ChangeSpec, ConfigError, Destination, FileMapping, ValidationError,
};
pub use files::{load_file, load_files, LoadedFile};
pub use jobs::{Job, JobError, JobOptions, JobReport, JobState, JobStep};
pub use pull_requests::{new_pull_request, open_pull_request};
pub use references::resolve_reference;
pub use runner::{Runner, RunnerConfig, RunnerError, DEFAULT_CONFIG_PATH};
pub use summary::{BatchError, BatchOutcome};
pub use trees::build_tree;
