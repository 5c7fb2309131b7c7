//! Settings - API endpoint, timeouts and local paths

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{API_URL_ENV, DATA_DIR_NAME, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_url: String,
    pub request_timeout_secs: u64,
    /// Where local storage lives
    pub data_dir: PathBuf,
    pub log_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: String::from(DEFAULT_API_URL),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: default_data_dir(),
            log_file: String::from("ui-store.log"),
        }
    }
}

/// `~/.ui-store`, or `./.ui-store` without a home directory
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

impl Settings {
    /// Load settings from `path`, falling back to `<data dir>/settings.yaml`
    /// and then to defaults. `UI_STORE_API_URL` overrides the API root.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = default_data_dir().join("settings.yaml");
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Settings::default()
                }
            }
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                settings.api_url = url;
            }
        }

        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
