//! SIM-Sarpras core library.
//!
//! University facilities asset management: asset registry, borrowing
//! workflow, maintenance history, master data, accounts and reports, backed
//! by a JSON-file store that mirrors the legacy persisted layout.

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LoggingConfig};
use crate::error::AppResult;
use crate::services::Services;
use crate::storage::Storage;

/// Shared application state handed to embedding frontends
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Open storage under the configured data directory and wire up the
    /// service layer.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let storage = Storage::open(&config.storage)?;
        let services = Services::new(storage, &config);
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }
}

/// Install the global tracing subscriber. Safe to call more than once; the
/// first installation wins.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sarpras={}", config.level)));

    if config.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .ok();
    }
}
