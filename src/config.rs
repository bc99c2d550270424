//! Application configuration

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use firmcast_dispatch::WebhookClientConfig;

/// Configuration file path, overridable via `FIRMCAST_CONFIG`.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database file
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "data/firmcast.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Webhook request timeout in seconds
    pub timeout_secs: u64,

    /// Log payloads instead of sending them
    pub dry_run: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            dry_run: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from `FIRMCAST_CONFIG` or the default path,
    /// falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var("FIRMCAST_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if std::path::Path::new(&config_path).exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {}", config_path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", config_path))
        } else {
            info!("Config file not found, using defaults");
            Ok(AppConfig::default())
        }
    }

    /// Client configuration for the dispatcher.
    pub fn client_config(&self) -> WebhookClientConfig {
        WebhookClientConfig {
            timeout: Duration::from_secs(self.dispatch.timeout_secs),
            dry_run: self.dispatch.dry_run,
        }
    }
}
