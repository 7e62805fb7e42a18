//! Runner configuration.

use std::path::{Path, PathBuf};

/// Default location of the batch description.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the batch description.
    config_path: PathBuf,
    /// GitHub token used for API calls.
    token: Option<String>,
    /// Whether to preview jobs without writing anything.
    dry_run: bool,
    /// Maximum number of jobs running at once.
    concurrency: usize,
}

impl RunnerConfig {
    /// Creates a sequential, non dry-run configuration.
    pub fn new(config_path: PathBuf, token: Option<String>) -> Self {
        Self {
            config_path,
            token,
            dry_run: false,
            concurrency: 1,
        }
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets the maximum number of concurrent jobs. Values below 1 mean 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Returns the batch description path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the configured token, ignoring empty values.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the maximum number of concurrent jobs.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_CONFIG_PATH), None)
    }
}
