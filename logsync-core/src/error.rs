//! Error taxonomy for a sync run.
//!
//! Every variant is fatal: nothing in the core recovers locally. The next
//! scheduled run re-queries remote state, so stopping loudly is always safe.
//! A missing remote object is *not* an error; see
//! [`RemoteObjectMeta`](crate::contract::RemoteObjectMeta).

use std::path::PathBuf;
use thiserror::Error;

use crate::contract::StoreError;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("log directory {path:?} is unreadable: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to resolve local hostname: {0}")]
    HostnameUnavailable(#[source] std::io::Error),

    /// Auth, network or service failure while querying the store.
    #[error("remote store error for key {key}: {source}")]
    Remote {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("local file {path:?} is unreadable: {source}")]
    LocalFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("upload of {path:?} to {key} failed: {source}")]
    UploadFailed {
        path: PathBuf,
        key: String,
        #[source]
        source: StoreError,
    },
}
