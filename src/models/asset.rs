//! Asset model and related types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::{AssetCondition, AssetStatus};
use crate::storage::Entity;

/// Physical placement of an asset.
///
/// `study_program` references a work unit by name, not id; renaming or
/// deleting the unit leaves the reference dangling (see master data docs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetLocation {
    pub building: String,
    pub room: String,
    pub study_program: String,
}

/// A tracked physical item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    /// Inventory code, unique across assets
    pub code: String,
    pub name: String,
    /// Category name (loose reference to master data)
    pub category: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub location: AssetLocation,
    pub condition: AssetCondition,
    pub status: AssetStatus,
    pub purchase_date: NaiveDate,
    pub price: Decimal,
}

impl Entity for Asset {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Create/update asset payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAsset {
    #[validate(length(min = 3, message = "Asset code must be at least 3 characters"))]
    pub code: String,
    #[validate(length(min = 3, message = "Asset name must be at least 3 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "Asset category is required"))]
    pub category: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub location: AssetLocation,
    pub condition: AssetCondition,
    pub purchase_date: NaiveDate,
    pub price: Decimal,
}
