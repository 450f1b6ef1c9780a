//! Application settings
//!
//! Endpoint configuration persisted at
//! `~/.config/cause-submission/settings.json`. A missing or unreadable file
//! yields defaults.

use crate::api::{join_url, DEFAULT_BASE_URL, SUBMIT_PATH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "cause-submission";
const SETTINGS_FILE: &str = "settings.json";

/// API connection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConnectionSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_submit_path")]
    pub submit_path: String,
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_submit_path() -> String { SUBMIT_PATH.to_string() }

impl Default for ApiConnectionSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            submit_path: default_submit_path(),
        }
    }
}

/// Complete application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub api_connection: ApiConnectionSettings,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppSettings {
    /// Full URL the form posts to
    pub fn endpoint_url(&self) -> String {
        join_url(&self.api_connection.base_url, &self.api_connection.submit_path)
    }

    /// Default config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, returning defaults if the file is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        let Ok(json) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save to the default location
    pub fn save(&self) -> Result<PathBuf, SettingsError> {
        let path = Self::config_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write pretty JSON to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
