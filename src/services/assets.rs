//! Asset registry operations

use rust_decimal::Decimal;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::asset::CreateAsset;
use crate::models::{new_id, Asset, AssetStatus, NotificationKind};
use crate::storage::Storage;

use super::notifications::NotificationService;

#[derive(Clone)]
pub struct AssetsService {
    storage: Storage,
    notifications: NotificationService,
}

impl AssetsService {
    pub fn new(storage: Storage, notifications: NotificationService) -> Self {
        Self {
            storage,
            notifications,
        }
    }

    pub fn list(&self) -> AppResult<Vec<Asset>> {
        self.storage.assets.list()
    }

    pub fn get(&self, id: &str) -> AppResult<Option<Asset>> {
        self.storage.assets.get(id)
    }

    /// Case-insensitive substring search over name and inventory code
    pub fn search(&self, term: &str) -> AppResult<Vec<Asset>> {
        let needle = term.to_lowercase();
        self.storage.assets.read(|assets| {
            assets
                .iter()
                .filter(|a| {
                    a.name.to_lowercase().contains(&needle)
                        || a.code.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect()
        })
    }

    /// Register a new asset. New assets always start as `Available`.
    pub fn create(&self, payload: CreateAsset) -> AppResult<Asset> {
        payload.validate()?;
        check_price(payload.price)?;
        self.check_code_unique(&payload.code, None)?;

        let asset = Asset {
            id: new_id(),
            code: payload.code,
            name: payload.name,
            category: payload.category,
            asset_type: payload.asset_type,
            location: payload.location,
            condition: payload.condition,
            status: AssetStatus::Available,
            purchase_date: payload.purchase_date,
            price: payload.price,
        };
        let asset = self.storage.assets.insert(asset)?;

        tracing::info!(asset_id = %asset.id, code = %asset.code, "asset registered");
        self.notifications.notify(
            format!("New asset \"{}\" registered.", asset.name),
            NotificationKind::Success,
        )?;
        Ok(asset)
    }

    /// Edit an asset's descriptive fields. The availability status is owned
    /// by the borrowing workflow and is carried over unchanged.
    pub fn update(&self, id: &str, payload: CreateAsset) -> AppResult<Asset> {
        payload.validate()?;
        check_price(payload.price)?;
        self.check_code_unique(&payload.code, Some(id))?;

        let existing = self
            .storage
            .assets
            .get(id)?
            .ok_or_else(|| AppError::NotFound(format!("No asset with id {}", id)))?;

        let updated = Asset {
            id: existing.id,
            code: payload.code,
            name: payload.name,
            category: payload.category,
            asset_type: payload.asset_type,
            location: payload.location,
            condition: payload.condition,
            status: existing.status,
            purchase_date: payload.purchase_date,
            price: payload.price,
        };
        let updated = self.storage.assets.replace(id, updated)?;

        self.notifications.notify(
            format!("Changes to asset \"{}\" saved.", updated.name),
            NotificationKind::Success,
        )?;
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> AppResult<Asset> {
        let removed = self.storage.assets.remove(id)?;
        tracing::info!(asset_id = id, code = %removed.code, "asset deleted");
        self.notifications.notify(
            format!("Asset \"{}\" deleted from the system.", removed.name),
            NotificationKind::Info,
        )?;
        Ok(removed)
    }

    fn check_code_unique(&self, code: &str, exclude_id: Option<&str>) -> AppResult<()> {
        let taken = self.storage.assets.read(|assets| {
            assets
                .iter()
                .any(|a| a.code == code && Some(a.id.as_str()) != exclude_id)
        })?;
        if taken {
            return Err(AppError::Conflict(format!(
                "Asset code {} is already registered",
                code
            )));
        }
        Ok(())
    }
}

fn check_price(price: Decimal) -> AppResult<()> {
    if price <= Decimal::ZERO {
        return Err(AppError::Validation(
            "Price must be a positive number".to_string(),
        ));
    }
    Ok(())
}
