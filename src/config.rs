//! Configuration management for SIM-Sarpras

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one JSON file per collection
    pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationsConfig {
    /// Maximum number of retained notifications (oldest dropped)
    pub capacity: usize,
    /// Seconds before an active toast auto-dismisses
    pub toast_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        // Pick up a .env file when present; ignored otherwise
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix SARPRAS_)
            .add_source(
                Environment::with_prefix("SARPRAS")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override data directory from SARPRAS_DATA_DIR env var if present
            .set_override_option("storage.data_dir", env::var("SARPRAS_DATA_DIR").ok())?
            .set_default("storage.data_dir", "data")?
            .set_default("notifications.capacity", 20i64)?
            .set_default("notifications.toast_seconds", 3i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            capacity: 20,
            toast_seconds: 3,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
