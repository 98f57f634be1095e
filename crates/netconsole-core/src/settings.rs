//! Host settings.
//!
//! Stored as JSON under the platform config directory
//! (`~/.config/netconsole/settings.json` on Linux).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;

/// Application name used for the config directory.
const APP_DIR: &str = "netconsole";

/// Settings file name.
const SETTINGS_FILE: &str = "settings.json";

/// Settings the host reads at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Networks offered in the account form. `None` hides the selector.
    pub networks: Option<Vec<String>>,
    /// Log filter directive, overridden by `RUST_LOG`.
    pub log_filter: Option<String>,
}

impl HostSettings {
    /// Default settings file location.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(SETTINGS_FILE)
    }

    /// Load settings from `path`. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self> {
        if !tokio::fs::try_exists(path).await? {
            debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path).await?;
        let settings = serde_json::from_str(&contents)?;
        debug!("Settings loaded from {}", path.display());
        Ok(settings)
    }
}
