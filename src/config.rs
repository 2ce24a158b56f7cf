// Store configuration loaded from YAML

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default lifetime of a notification before it auto-dismisses
pub const DEFAULT_NOTIFICATION_TTL_MS: u64 = 3000;

/// Tunables for a [`TaskListStore`](crate::TaskListStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long a notification stays visible, in milliseconds
    pub notification_ttl_ms: u64,
    pub messages: Messages,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            messages: Messages::default(),
        }
    }
}

/// Text of the success notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub added: String,
    pub deleted: String,
    pub edited: String,
    pub cleared: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            added: "Todo added successfully!".to_string(),
            deleted: "Todo deleted successfully!".to_string(),
            edited: "Todo edited successfully!".to_string(),
            cleared: "Cleared completed tasks!".to_string(),
        }
    }
}

impl Config {
    /// Parse a config from YAML text; missing fields take their defaults
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Failed to parse config YAML")
    }

    /// Load a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)?;
        info!(path = ?path, ttl_ms = config.notification_ttl_ms, "Loaded config");
        Ok(config)
    }

    /// Load from an explicit path, else the user config file if present, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/todostore/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("todostore").join("config.yaml"))
    }
}
