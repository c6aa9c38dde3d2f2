use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::constants::DEFAULT_API_HOST;

/// Optional client settings read from `config.toml`.
///
/// Credentials never live here; they always come from the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_host: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            timeout_secs: 60,
            user_agent: format!("suiteql-cli/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Settings {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("suiteql")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".suiteql")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load settings from an explicit path, or from the default location.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file does not exist: {}", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let path = Self::get_config_path()?;
                if !path.exists() {
                    debug!("No config file at {:?}, using defaults", path);
                    return Ok(Self::default());
                }
                path
            }
        };

        info!("Loading config from: {:?}", config_path);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        if settings.api_host.trim().is_empty() {
            anyhow::bail!("api_host must not be empty");
        }
        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn with_timeout_secs(mut self, timeout_secs: Option<u64>) -> Self {
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }
}
