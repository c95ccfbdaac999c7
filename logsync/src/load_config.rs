/// `load_config` module: reads the YAML config file into the core [`SyncConfig`].
///
/// This is the only place where the untrusted config file is parsed.
///
/// # Errors
/// - [`ConfigError::Missing`] when the file does not exist
/// - [`ConfigError::Invalid`] when it cannot be read or is not a valid config
///
/// Both are fatal at startup; the CLI surfaces them as-is.
use logsync_core::config::SyncConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file is missing: {0:?}")]
    Missing(PathBuf),

    #[error("Failed to load config file {path:?}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SyncConfig, ConfigError> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    if !path_ref.exists() {
        error!(config_path = ?path_ref, "Config file is missing");
        return Err(ConfigError::Missing(path_ref.to_path_buf()));
    }

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => content,
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(ConfigError::Invalid {
                path: path_ref.to_path_buf(),
                reason: format!("read error: {e}"),
            });
        }
    };

    let config: SyncConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(ConfigError::Invalid {
                path: path_ref.to_path_buf(),
                reason: format!("failed to parse config YAML: {e}"),
            });
        }
    };

    config.trace_loaded();
    Ok(config)
}
