//! Persistence layer: one JSON file per collection, mirroring the legacy
//! local-storage key layout.

pub mod collection;
pub mod seed;
pub mod session;

use std::fs;

use crate::config::StorageConfig;
use crate::error::AppResult;
use crate::models::{
    Asset, BorrowingRecord, Category, Location, MaintenanceRecord, User, WorkUnit,
};

pub use collection::JsonCollection;
pub use session::SessionStore;

/// Anything addressable by a string id in a collection
pub trait Entity {
    fn id(&self) -> &str;
}

/// Container for all collection stores.
///
/// Key names are kept from the legacy persisted layout: `user`,
/// `app_users`, `assets`, `maintenance`, `borrowing`, `locations`,
/// `categories`, `work_units`.
#[derive(Clone)]
pub struct Storage {
    pub session: SessionStore,
    pub users: JsonCollection<User>,
    pub assets: JsonCollection<Asset>,
    pub maintenance: JsonCollection<MaintenanceRecord>,
    pub borrowing: JsonCollection<BorrowingRecord>,
    pub locations: JsonCollection<Location>,
    pub categories: JsonCollection<Category>,
    pub work_units: JsonCollection<WorkUnit>,
}

impl Storage {
    /// Open every collection under the configured data directory, seeding
    /// missing files with the first-run data set.
    pub fn open(config: &StorageConfig) -> AppResult<Self> {
        let dir = &config.data_dir;
        fs::create_dir_all(dir)?;
        tracing::info!(data_dir = %dir.display(), "opening storage");

        Ok(Self {
            session: SessionStore::open(dir, "user")?,
            users: JsonCollection::open(dir, "app_users", seed::initial_users()?)?,
            assets: JsonCollection::open(dir, "assets", seed::initial_assets()?)?,
            maintenance: JsonCollection::open(dir, "maintenance", seed::initial_maintenance()?)?,
            borrowing: JsonCollection::open(dir, "borrowing", seed::initial_borrowing()?)?,
            locations: JsonCollection::open(dir, "locations", seed::initial_locations()?)?,
            categories: JsonCollection::open(dir, "categories", seed::initial_categories()?)?,
            work_units: JsonCollection::open(dir, "work_units", seed::initial_work_units()?)?,
        })
    }
}
