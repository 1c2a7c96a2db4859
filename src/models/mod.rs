//! Data models for SIM-Sarpras

pub mod asset;
pub mod borrowing;
pub mod enums;
pub mod maintenance;
pub mod master;
pub mod notification;
pub mod report;
pub mod route;
pub mod user;

// Re-export commonly used types
pub use asset::{Asset, AssetLocation};
pub use borrowing::BorrowingRecord;
pub use enums::{
    AssetCondition, AssetStatus, BorrowingStatus, MaintenanceStatus, MaintenanceType,
    NotificationKind,
};
pub use maintenance::MaintenanceRecord;
pub use master::{Category, Location, WorkUnit};
pub use notification::AppNotification;
pub use report::{DateRange, ReportDocument};
pub use user::{User, UserRole};

/// Generate a fresh entity id
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
