//! Orchestrates a full batch run.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_CONFIG_PATH};
pub use error::RunnerError;

use crate::batch::{run_all, Batch};
use crate::client::{GitHost, GitHubClient};
use crate::config::load_change_spec;
use crate::files::load_file;
use crate::jobs::JobOptions;
use crate::summary::BatchOutcome;
use tracing::{info, warn};

/// Loads a batch description and applies it to every destination.
pub struct Runner {
    config: RunnerConfig,
    host: Box<dyn GitHost>,
}

impl Runner {
    /// Builds a runner talking to GitHub with the configured token.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::MissingToken`] if no token is configured.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let token = config.token().ok_or(RunnerError::MissingToken)?;
        let client = GitHubClient::new(token.to_string())?;
        Ok(Self::with_host(config, Box::new(client)))
    }

    /// Builds a runner on top of any [`GitHost`].
    pub fn with_host(config: RunnerConfig, host: Box<dyn GitHost>) -> Self {
        Self { config, host }
    }

    /// Executes the run.
    ///
    /// The description is loaded and validated before any remote call. The
    /// author identity is then resolved once and shared by every job.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] for problems that prevent the batch from
    /// starting. Job failures are reported in the returned [`BatchOutcome`].
    pub async fn run(&self) -> Result<BatchOutcome, RunnerError> {
        let spec = load_change_spec(self.config.config_path())?;
        let batch = Batch::new(spec)?;

        let author = self
            .host
            .authenticated_user()
            .await
            .map_err(RunnerError::Auth)?;
        info!(author = %author.name, email = %author.email, "Resolved commit author");

        let jobs = batch.expand(&author);
        if jobs.is_empty() {
            warn!("No destinations to process");
            return Ok(BatchOutcome::default());
        }

        if self.config.dry_run() {
            print_dry_run_preview(&jobs).await;
            return Ok(BatchOutcome::default());
        }

        Ok(run_all(self.host.as_ref(), jobs, self.config.concurrency()).await)
    }
}

async fn print_dry_run_preview(jobs: &[JobOptions]) {
    let Some(first) = jobs.first() else {
        return;
    };

    println!("\n[DRY RUN] Branch: {}", first.commit_branch);
    println!("  Commit message: {}", first.commit_message);
    println!("  Author: {} <{}>", first.author.name, first.author.email);
    println!("  Files:");
    for mapping in &first.files {
        match load_file(mapping).await {
            Ok(file) => println!(
                "    {} -> {} ({}, {} bytes)",
                mapping.local,
                file.target,
                file.mode.as_str(),
                file.content.len()
            ),
            Err(e) => {
                warn!(error = %e, "File would fail to load");
                println!("    {} -> {} (error: {e})", mapping.local, mapping.target);
            }
        }
    }

    println!("  Found {} destinations:\n", jobs.len());
    for (i, job) in jobs.iter().enumerate() {
        println!("  [{}/{}] {}", i + 1, jobs.len(), job.full_name());
        println!(
            "    Would open PR \"{}\": {} -> {}",
            job.subject, job.commit_branch, job.base_branch
        );
    }

    println!();
}
