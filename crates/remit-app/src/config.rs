//! Application configuration.

use crate::error::{AppError, AppResult};
use remit_pricing::RateTableConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Connect notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Auto-dismiss duration (ms). Default: 3,000 (3 seconds).
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    3_000
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Connect notification settings.
    #[serde(default)]
    pub notification: NotificationConfig,
    /// Fee comparison rate table.
    #[serde(default)]
    pub pricing: RateTableConfig,
}

impl AppConfig {
    /// Load configuration from file.
    ///
    /// Honours `REMIT_CONFIG`, falls back to `config/default.toml`,
    /// then to built-in defaults with a warning.
    pub fn load() -> AppResult<Self> {
        let config_path =
            std::env::var("REMIT_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

        if Path::new(&config_path).exists() {
            Self::from_file(&config_path)
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}
