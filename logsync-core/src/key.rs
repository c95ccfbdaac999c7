use chrono::NaiveDate;
use std::fmt;
use tracing::{error, info};

use crate::error::SyncError;

/// Object key of a shipped file:
/// `<directory_name>/<YYYY>/<MM>/<DD>/<hostname>/<relative_path>`.
///
/// Identical inputs always give byte-identical keys; the existence check
/// relies on this across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RemoteKey(String);

impl RemoteKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RemoteKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn build_key(
    directory_name: &str,
    date: NaiveDate,
    hostname: &str,
    relative_path: &str,
) -> RemoteKey {
    RemoteKey(format!(
        "{}/{}/{}/{}",
        directory_name,
        date.format("%Y/%m/%d"),
        hostname,
        relative_path
    ))
}

/// Per-run facts resolved once from the host and passed explicitly to every
/// component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub today: NaiveDate,
    pub hostname: String,
    /// Emit scanned paths and intermediate lists. Never changes control flow.
    pub verbose: bool,
}

impl RunContext {
    pub fn new(today: NaiveDate, hostname: impl Into<String>, verbose: bool) -> Self {
        Self {
            today,
            hostname: hostname.into(),
            verbose,
        }
    }

    /// Resolves today's local date and the local hostname.
    pub fn detect(verbose: bool) -> Result<Self, SyncError> {
        let today = chrono::Local::now().date_naive();
        let hostname = hostname::get()
            .map_err(|e| {
                error!(error = %e, "Failed to resolve hostname");
                SyncError::HostnameUnavailable(e)
            })?
            .into_string()
            .map_err(|raw| {
                error!(hostname = ?raw, "Hostname is not valid UTF-8");
                SyncError::HostnameUnavailable(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "hostname is not valid UTF-8",
                ))
            })?;

        info!(%today, %hostname, "Resolved run context");
        Ok(Self::new(today, hostname, verbose))
    }

    /// Today's date as matched against file names (`YYYY-MM-DD`).
    pub fn date_stamp(&self) -> String {
        self.today.format("%Y-%m-%d").to_string()
    }

    pub fn key_for(&self, directory_name: &str, relative_path: &str) -> RemoteKey {
        build_key(directory_name, self.today, &self.hostname, relative_path)
    }
}
