use tracing::{debug, error};

use crate::contract::ObjectStore;
use crate::error::SyncError;
use crate::key::RemoteKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDecision {
    NeedsUpload(UploadReason),
    AlreadySynced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadReason {
    /// Nothing stored at the key yet.
    Missing,
    /// Stored object differs in size, e.g. an earlier run shipped a file that
    /// was still being written. `remote` is `None` when the store reports no
    /// size.
    SizeMismatch { remote: Option<u64>, local: u64 },
}

/// Decides whether the object at `key` must be (re)uploaded. Only the size is
/// compared: same size with different content counts as synced.
pub async fn check_remote<S>(
    store: &S,
    bucket: &str,
    key: &RemoteKey,
    local_size: u64,
) -> Result<SyncDecision, SyncError>
where
    S: ObjectStore + ?Sized,
{
    let meta = store.head(bucket, key.as_str()).await.map_err(|e| {
        error!(bucket, key = %key, error = %e, "Remote existence check failed");
        SyncError::Remote {
            key: key.to_string(),
            source: e,
        }
    })?;

    let decision = if !meta.exists {
        SyncDecision::NeedsUpload(UploadReason::Missing)
    } else if meta.size_bytes == Some(local_size) {
        SyncDecision::AlreadySynced
    } else {
        SyncDecision::NeedsUpload(UploadReason::SizeMismatch {
            remote: meta.size_bytes,
            local: local_size,
        })
    };

    debug!(key = %key, ?meta, local_size, ?decision, "Remote check complete");
    Ok(decision)
}
