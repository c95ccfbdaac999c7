use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Sync settings for one run. Loaded once at startup and never mutated.
///
/// Field names follow the legacy PascalCase config keys; snake_case aliases
/// are accepted as well.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    #[serde(rename = "AWSBucket", alias = "bucket")]
    pub remote_bucket: String,
    #[serde(rename = "Region", alias = "region")]
    pub region: String,
    /// Named credential profile. Absent or empty means the default chain.
    #[serde(rename = "Env", alias = "profile", default)]
    pub credential_profile: Option<String>,
    /// Custom S3-compatible endpoint (LocalStack, MinIO).
    #[serde(rename = "Endpoint", alias = "endpoint", default)]
    pub endpoint: Option<String>,
    #[serde(rename = "LogDirectory", alias = "log_directory")]
    pub log_directory: PathBuf,
    #[serde(rename = "Debug", alias = "debug", default)]
    pub debug: bool,
    #[serde(rename = "LogTypes", alias = "log_types", default)]
    pub log_types: BTreeMap<String, LogTypeRule>,
}

/// A named log type: files starting with `log_prefix` are shipped under
/// `directory_name` in the bucket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogTypeRule {
    #[serde(rename = "LogPrefix", alias = "log_prefix")]
    pub log_prefix: String,
    #[serde(rename = "DirectoryName", alias = "directory_name")]
    pub directory_name: String,
}

impl SyncConfig {
    /// The credential profile to use, treating an empty string as unset.
    pub fn profile(&self) -> Option<&str> {
        self.credential_profile
            .as_deref()
            .filter(|profile| !profile.is_empty())
    }

    pub fn trace_loaded(&self) {
        info!(
            bucket = %self.remote_bucket,
            region = %self.region,
            profile = self.profile().unwrap_or("<default>"),
            log_directory = %self.log_directory.display(),
            log_types = self.log_types.len(),
            debug = self.debug,
            "Loaded SyncConfig"
        );
        debug!(?self, "SyncConfig loaded (full debug)");
    }
}
