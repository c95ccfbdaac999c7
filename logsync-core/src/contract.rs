//! # contract: the remote object-store capability
//!
//! The core never talks to S3 directly. It is handed an [`ObjectStore`]
//! implementation (the real `S3Store` in the CLI crate, or a mock in tests)
//! and only ever asks two things of it: what is stored at a key, and store
//! this file at a key.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall`; `MockObjectStore` is exported under
//!   the default `test-export-mocks` feature so integration tests can use it.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

/// Result of a point query against the store. Never cached between
/// candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteObjectMeta {
    pub exists: bool,
    /// Stored size, when the store reports one.
    pub size_bytes: Option<u64>,
}

impl RemoteObjectMeta {
    pub fn missing() -> Self {
        Self {
            exists: false,
            size_bytes: None,
        }
    }

    pub fn stored(size_bytes: u64) -> Self {
        Self {
            exists: true,
            size_bytes: Some(size_bytes),
        }
    }
}

/// Failure reported by an [`ObjectStore`]. "Not found" is never one of these.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("service error: {0}")]
    Service(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability handle for the remote store, shared read-only by every remote
/// call in a run.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Look up the object stored at `key`. A missing object is
    /// `Ok(RemoteObjectMeta::missing())`.
    async fn head(&self, bucket: &str, key: &str) -> Result<RemoteObjectMeta, StoreError>;

    /// Stream `body` to `key`, replacing any existing object, and return the
    /// location of the stored object.
    ///
    /// The file handle is owned by the call and closed when it returns,
    /// whether or not the upload succeeded.
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: tokio::fs::File,
    ) -> Result<String, StoreError>;
}
