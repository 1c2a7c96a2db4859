//! Dashboard aggregates

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::AppResult;
use crate::models::{
    AssetCondition, BorrowingRecord, BorrowingStatus, MaintenanceStatus,
};
use crate::storage::Storage;

/// One slice of the condition breakdown chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionCount {
    pub condition: AssetCondition,
    pub count: usize,
}

/// Everything the dashboard shows in one snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_assets: usize,
    pub maintenance_in_progress: usize,
    pub active_borrowings: usize,
    /// Assets in any condition other than `Good`
    pub damaged_assets: usize,
    pub condition_breakdown: Vec<ConditionCount>,
    pub total_asset_value: Decimal,
    /// Summed cost of completed maintenance only
    pub completed_maintenance_cost: Decimal,
    /// The five most recently filed borrowing records, newest first
    pub recent_borrowings: Vec<BorrowingRecord>,
}

#[derive(Clone)]
pub struct StatsService {
    storage: Storage,
}

impl StatsService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn dashboard(&self) -> AppResult<DashboardStats> {
        let assets = self.storage.assets.list()?;
        let maintenance = self.storage.maintenance.list()?;
        let borrowing = self.storage.borrowing.list()?;

        let condition_breakdown = AssetCondition::ALL
            .iter()
            .map(|condition| ConditionCount {
                condition: *condition,
                count: assets.iter().filter(|a| a.condition == *condition).count(),
            })
            .collect();

        let recent_borrowings: Vec<BorrowingRecord> =
            borrowing.iter().rev().take(5).cloned().collect();

        Ok(DashboardStats {
            total_assets: assets.len(),
            maintenance_in_progress: maintenance
                .iter()
                .filter(|m| m.status == MaintenanceStatus::InProgress)
                .count(),
            active_borrowings: borrowing
                .iter()
                .filter(|b| b.status == BorrowingStatus::Active)
                .count(),
            damaged_assets: assets.iter().filter(|a| a.condition.is_damaged()).count(),
            condition_breakdown,
            total_asset_value: assets.iter().map(|a| a.price).sum(),
            completed_maintenance_cost: maintenance
                .iter()
                .filter(|m| m.status == MaintenanceStatus::Done)
                .map(|m| m.cost)
                .sum(),
            recent_borrowings,
        })
    }
}
