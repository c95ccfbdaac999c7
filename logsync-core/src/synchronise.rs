//! High-level pipeline: scan → filter → check → upload for one run.
//!
//! This module drives a single sync of the configured log directory into the
//! configured bucket:
//!   - Scans the log directory for every regular file
//!   - Keeps the files dated today that match a log-type rule (one candidate per rule)
//!   - For each candidate, builds its key and asks the store what is already there
//!   - Uploads when the object is missing or its size differs, skips otherwise
//!
//! # Major Types
//! - [`SynchroniseReport`]: what was scanned, shipped and skipped, for the CLI to print
//!
//! # Responsibilities
//! - Strictly sequential, fail-fast: the first error ends the run and is returned
//! - No local bookkeeping: every run re-queries the store, which is what makes re-running safe
//! - Verbose diagnostics only when [`RunContext::verbose`] is set
//!
//! # Navigation
//! - Main entrypoint: [`synchronise`]

use tracing::{error, info};

use crate::check::{check_remote, SyncDecision};
use crate::config::SyncConfig;
use crate::contract::ObjectStore;
use crate::error::SyncError;
use crate::filter::select_candidates;
use crate::key::{RemoteKey, RunContext};
use crate::scan::scan_directory;
use crate::upload::upload_file;

#[derive(Debug, Default)]
pub struct SynchroniseReport {
    pub scanned: usize,
    pub candidates: usize,
    pub uploaded: Vec<UploadedObject>,
    pub skipped: Vec<RemoteKey>,
}

#[derive(Debug, Clone)]
pub struct UploadedObject {
    pub key: RemoteKey,
    pub location: String,
    pub size_bytes: u64,
}

pub async fn synchronise<S>(
    config: &SyncConfig,
    ctx: &RunContext,
    store: &S,
) -> Result<SynchroniseReport, SyncError>
where
    S: ObjectStore + ?Sized,
{
    info!(
        bucket = %config.remote_bucket,
        log_directory = %config.log_directory.display(),
        today = %ctx.today,
        hostname = %ctx.hostname,
        "[SYNC] Starting synchronisation"
    );

    let files = scan_directory(&config.log_directory)?;
    if ctx.verbose {
        info!(?files, "[SYNC] Scanned paths");
    }

    let today = ctx.date_stamp();
    let candidates = select_candidates(&config.log_directory, &files, &today, &config.log_types);
    info!(
        scanned = files.len(),
        candidates = candidates.len(),
        "[SYNC] Selected candidates"
    );
    if ctx.verbose {
        let listed: Vec<_> = candidates
            .iter()
            .map(|c| format!("{} ({})", c.relative_path, c.rule_name))
            .collect();
        info!(candidates = ?listed, "[SYNC] Candidate list");
    }

    let mut report = SynchroniseReport {
        scanned: files.len(),
        candidates: candidates.len(),
        ..Default::default()
    };

    for candidate in &candidates {
        let key = ctx.key_for(&candidate.rule.directory_name, &candidate.relative_path);

        let local_size = tokio::fs::metadata(&candidate.absolute_path)
            .await
            .map_err(|e| {
                error!(path = %candidate.absolute_path.display(), error = %e, "[SYNC][ERROR] Failed to stat local file");
                SyncError::LocalFileUnreadable {
                    path: candidate.absolute_path.clone(),
                    source: e,
                }
            })?
            .len();

        match check_remote(store, &config.remote_bucket, &key, local_size).await? {
            SyncDecision::AlreadySynced => {
                if ctx.verbose {
                    info!(key = %key, local_size, "[SYNC] Already synced, skipping");
                }
                report.skipped.push(key);
            }
            SyncDecision::NeedsUpload(reason) => {
                if ctx.verbose {
                    info!(key = %key, ?reason, "[SYNC] Needs upload");
                }
                let location =
                    upload_file(store, &config.remote_bucket, &key, &candidate.absolute_path)
                        .await?;
                report.uploaded.push(UploadedObject {
                    key,
                    location,
                    size_bytes: local_size,
                });
            }
        }
    }

    info!(
        uploaded = report.uploaded.len(),
        skipped = report.skipped.len(),
        "[SYNC] Synchronisation complete"
    );
    Ok(report)
}
