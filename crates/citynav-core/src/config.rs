//! User configuration for citynav (stored in ~/.config/citynav/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CityNavError, Result};
use crate::graph::Metric;

const CONFIG_DIR: &str = "citynav";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CITYNAV_CONFIG_DIR";

/// Overlay file used when neither the command line nor the config names one
pub const DEFAULT_OVERLAY_FILE: &str = "datos_personalizados.json";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavConfig {
    /// Overlay JSON file; relative paths resolve against the working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_path: Option<PathBuf>,

    /// Metric used by `route` when none is given
    #[serde(default)]
    pub default_metric: Metric,
}

impl NavConfig {
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    CityNavError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| CityNavError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| CityNavError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Overlay file to use: command line, then config, then the default name
    pub fn resolve_overlay_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.overlay_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OVERLAY_FILE))
    }
}
