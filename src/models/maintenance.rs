//! Maintenance record model and related types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::{MaintenanceStatus, MaintenanceType};
use crate::storage::Entity;

/// A maintenance/repair record for an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: String,
    pub asset_id: String,
    /// Asset name snapshot taken at creation time
    pub asset_name: String,
    pub date: NaiveDate,
    pub description: String,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    pub cost: Decimal,
    pub performed_by: String,
    pub status: MaintenanceStatus,
}

impl Entity for MaintenanceRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Create maintenance record payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenance {
    pub asset_id: String,
    pub date: NaiveDate,
    #[validate(length(min = 5, message = "Description must be at least 5 characters"))]
    pub description: String,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    pub cost: Decimal,
    #[validate(length(min = 1, message = "Performed-by is required"))]
    pub performed_by: String,
    pub status: MaintenanceStatus,
}
