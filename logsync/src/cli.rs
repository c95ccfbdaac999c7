///
/// This module implements the CLI interface for logsync: argument parsing and
/// the async `run` entrypoint that wires config, host context and the S3 store
/// into the core pipeline.
///
/// All decision logic (scanning, filtering, keys, upload-or-skip) lives in
/// [`logsync-core`]. This module is strictly glue.
///
/// ## How To Use
/// - From a scheduler: `logsync --config /etc/logsync/config.yml`
/// - For programmatic/integration use: call [`run`] with a constructed [`Cli`].
///
/// [`logsync-core`]: ../../logsync_core/
use crate::load_config::load_config;
use crate::s3::S3Store;
use anyhow::Result;
use clap::Parser;
use logsync_core::key::RunContext;
use logsync_core::synchronise::synchronise;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Ship today's log files to S3, skipping files already uploaded.
#[derive(Debug, Parser)]
#[clap(
    name = "logsync",
    version,
    about = "Ship today's local log files to an S3 bucket, skipping ones already uploaded"
)]
pub struct Cli {
    /// Config file location
    #[clap(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    let config = load_config(&cli.config)?;
    let ctx = RunContext::detect(config.debug)?;
    let store = S3Store::connect(&config).await;

    tracing::info!(bucket = %config.remote_bucket, "Starting synchronisation process");
    match synchronise(&config, &ctx, &store).await {
        Ok(report) => {
            tracing::info!(
                scanned = report.scanned,
                candidates = report.candidates,
                uploaded = report.uploaded.len(),
                skipped = report.skipped.len(),
                "Synchronisation complete"
            );
            if ctx.verbose {
                tracing::info!(?report, "Synchronisation report");
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Synchronisation failed");
            Err(e.into())
        }
    }
}
