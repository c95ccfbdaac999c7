use std::path::Path;
use tracing::{error, info};

use crate::contract::ObjectStore;
use crate::error::SyncError;
use crate::key::RemoteKey;

/// Streams the file at `path` to `key` and returns the stored location.
///
/// The file handle moves into the store call and is dropped (closed) when it
/// returns, on success and failure alike. A failed upload is not cleaned up:
/// an object-store overwrite is atomic from the client's point of view.
pub async fn upload_file<S>(
    store: &S,
    bucket: &str,
    key: &RemoteKey,
    path: &Path,
) -> Result<String, SyncError>
where
    S: ObjectStore + ?Sized,
{
    let file = tokio::fs::File::open(path).await.map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to open local file for upload");
        SyncError::LocalFileUnreadable {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    info!(bucket, key = %key, path = %path.display(), "Uploading file");
    let location = store.put(bucket, key.as_str(), file).await.map_err(|e| {
        error!(bucket, key = %key, error = %e, "Upload failed");
        SyncError::UploadFailed {
            path: path.to_path_buf(),
            key: key.to_string(),
            source: e,
        }
    })?;

    info!(%location, "Upload complete");
    println!("file uploaded to, {location}");
    Ok(location)
}
