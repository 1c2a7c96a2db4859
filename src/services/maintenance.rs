//! Maintenance record operations

use rust_decimal::Decimal;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::maintenance::CreateMaintenance;
use crate::models::{new_id, MaintenanceRecord, MaintenanceStatus, NotificationKind};
use crate::storage::Storage;

use super::notifications::NotificationService;

#[derive(Clone)]
pub struct MaintenanceService {
    storage: Storage,
    notifications: NotificationService,
}

impl MaintenanceService {
    pub fn new(storage: Storage, notifications: NotificationService) -> Self {
        Self {
            storage,
            notifications,
        }
    }

    pub fn list(&self) -> AppResult<Vec<MaintenanceRecord>> {
        self.storage.maintenance.list()
    }

    pub fn get(&self, id: &str) -> AppResult<Option<MaintenanceRecord>> {
        self.storage.maintenance.get(id)
    }

    /// Record a maintenance activity against an existing asset. The asset
    /// name is snapshotted into the record.
    pub fn create(&self, payload: CreateMaintenance) -> AppResult<MaintenanceRecord> {
        payload.validate()?;
        if payload.cost < Decimal::ZERO {
            return Err(AppError::Validation("Cost cannot be negative".to_string()));
        }

        let asset = self
            .storage
            .assets
            .get(&payload.asset_id)?
            .ok_or_else(|| AppError::NotFound(format!("No asset with id {}", payload.asset_id)))?;

        let record = MaintenanceRecord {
            id: new_id(),
            asset_id: asset.id.clone(),
            asset_name: asset.name.clone(),
            date: payload.date,
            description: payload.description,
            maintenance_type: payload.maintenance_type,
            cost: payload.cost,
            performed_by: payload.performed_by,
            status: payload.status,
        };
        let record = self.storage.maintenance.insert(record)?;

        tracing::info!(record_id = %record.id, asset = %record.asset_name, "maintenance recorded");
        self.notifications.notify(
            format!("Maintenance record for \"{}\" saved.", record.asset_name),
            NotificationKind::Success,
        )?;
        Ok(record)
    }

    /// Flip a record to `Done`. Idempotent on already-completed records.
    pub fn mark_complete(&self, id: &str) -> AppResult<MaintenanceRecord> {
        let updated = self.storage.maintenance.update(id, |r| {
            r.status = MaintenanceStatus::Done;
            Ok(())
        })?;

        self.notifications.notify(
            format!("Maintenance for \"{}\" marked as done.", updated.asset_name),
            NotificationKind::Success,
        )?;
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> AppResult<MaintenanceRecord> {
        let removed = self.storage.maintenance.remove(id)?;
        self.notifications.notify(
            format!(
                "Maintenance record for \"{}\" deleted.",
                removed.asset_name
            ),
            NotificationKind::Info,
        )?;
        Ok(removed)
    }
}
