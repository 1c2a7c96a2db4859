//! Business logic layer.
//!
//! Each service owns a handle to the shared storage and to the notification
//! sink; the [`Services`] container wires them up once per application.

pub mod assets;
pub mod borrowing;
pub mod maintenance;
pub mod master;
pub mod notifications;
pub mod reports;
pub mod stats;
pub mod users;

use crate::config::AppConfig;
use crate::storage::Storage;

pub use assets::AssetsService;
pub use borrowing::BorrowingService;
pub use maintenance::MaintenanceService;
pub use master::MasterDataService;
pub use notifications::NotificationService;
pub use reports::ReportsService;
pub use stats::{DashboardStats, StatsService};
pub use users::UsersService;

/// Container for all application services
#[derive(Clone)]
pub struct Services {
    pub assets: AssetsService,
    pub borrowing: BorrowingService,
    pub maintenance: MaintenanceService,
    pub master: MasterDataService,
    pub users: UsersService,
    pub notifications: NotificationService,
    pub reports: ReportsService,
    pub stats: StatsService,
}

impl Services {
    pub fn new(storage: Storage, config: &AppConfig) -> Self {
        let notifications = NotificationService::new(&config.notifications);
        Self {
            assets: AssetsService::new(storage.clone(), notifications.clone()),
            borrowing: BorrowingService::new(storage.clone(), notifications.clone()),
            maintenance: MaintenanceService::new(storage.clone(), notifications.clone()),
            master: MasterDataService::new(storage.clone(), notifications.clone()),
            users: UsersService::new(storage.clone(), notifications.clone()),
            reports: ReportsService::new(storage.clone()),
            stats: StatsService::new(storage),
            notifications,
        }
    }
}
