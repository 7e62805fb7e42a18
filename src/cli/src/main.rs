//! CLI for batch-pr.
//!
//! Applies the same file change to many GitHub repositories and opens one
//! pull request per repository.

use batch_pr::{BatchOutcome, Runner, RunnerConfig, RunnerError, DEFAULT_CONFIG_PATH};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Batch Pull Requester - Open the same change as pull requests across many repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Location of the batch description.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_AUTH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Preview the jobs without creating branches, commits or PRs.
    #[arg(long)]
    dry_run: bool,

    /// Maximum number of repositories processed at once.
    #[arg(long, default_value_t = 1)]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Pin the rustls crypto provider before any client is built
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(outcome) => report(outcome),
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so stdout only carries the created PR URLs.
/// The level is read from `RUST_LOG` and defaults to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<BatchOutcome, RunnerError> {
    let config = RunnerConfig::new(args.config, args.token)
        .with_dry_run(args.dry_run)
        .with_concurrency(args.concurrency);
    let runner = Runner::new(config)?;
    info!("hold ...");
    runner.run().await
}

/// Prints the created PR URLs, then the error that stopped the batch.
fn report(outcome: BatchOutcome) -> ExitCode {
    let skipped = outcome.not_attempted.len();
    let (urls, error) = outcome.into_parts();

    for url in &urls {
        println!("{url}");
    }

    match error {
        Some(e) => {
            error!(created = urls.len(), skipped, "Batch stopped");
            eprintln!("sorry: {e}");
            ExitCode::from(1)
        }
        None => {
            info!(created = urls.len(), "done.");
            ExitCode::SUCCESS
        }
    }
}
