//! Master data management: locations, categories, work units.
//!
//! Entities here are referenced elsewhere by name. Updates and deletes do
//! not cascade into assets or borrowing records; existing rows keep the old
//! name and simply stop matching the master list.

use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::master::{CreateCategory, CreateLocation, CreateWorkUnit};
use crate::models::{new_id, Category, Location, NotificationKind, WorkUnit};
use crate::storage::Storage;

use super::notifications::NotificationService;

#[derive(Clone)]
pub struct MasterDataService {
    storage: Storage,
    notifications: NotificationService,
}

impl MasterDataService {
    pub fn new(storage: Storage, notifications: NotificationService) -> Self {
        Self {
            storage,
            notifications,
        }
    }

    // --- Locations ---

    pub fn locations(&self) -> AppResult<Vec<Location>> {
        self.storage.locations.list()
    }

    pub fn create_location(&self, payload: CreateLocation) -> AppResult<Location> {
        payload.validate()?;
        let location = Location {
            id: new_id(),
            building: payload.building,
            room: payload.room,
        };
        let location = self.storage.locations.insert(location)?;
        self.notifications.notify(
            format!("Location \"{} - {}\" added.", location.building, location.room),
            NotificationKind::Success,
        )?;
        Ok(location)
    }

    pub fn update_location(&self, id: &str, payload: CreateLocation) -> AppResult<Location> {
        payload.validate()?;
        let updated = self.storage.locations.replace(
            id,
            Location {
                id: id.to_string(),
                building: payload.building,
                room: payload.room,
            },
        )?;
        self.notifications.notify(
            "Location data updated.".to_string(),
            NotificationKind::Success,
        )?;
        Ok(updated)
    }

    pub fn delete_location(&self, id: &str) -> AppResult<Location> {
        let removed = self.storage.locations.remove(id)?;
        self.notifications.notify(
            format!("Location \"{} - {}\" deleted.", removed.building, removed.room),
            NotificationKind::Info,
        )?;
        Ok(removed)
    }

    // --- Categories ---

    pub fn categories(&self) -> AppResult<Vec<Category>> {
        self.storage.categories.list()
    }

    pub fn create_category(&self, payload: CreateCategory) -> AppResult<Category> {
        payload.validate()?;
        self.check_category_unique(&payload.name, None)?;
        let category = Category {
            id: new_id(),
            name: payload.name,
            description: payload.description,
        };
        let category = self.storage.categories.insert(category)?;
        self.notifications.notify(
            format!("Category \"{}\" added.", category.name),
            NotificationKind::Success,
        )?;
        Ok(category)
    }

    pub fn update_category(&self, id: &str, payload: CreateCategory) -> AppResult<Category> {
        payload.validate()?;
        self.check_category_unique(&payload.name, Some(id))?;
        let updated = self.storage.categories.replace(
            id,
            Category {
                id: id.to_string(),
                name: payload.name,
                description: payload.description,
            },
        )?;
        self.notifications.notify(
            format!("Category \"{}\" updated.", updated.name),
            NotificationKind::Success,
        )?;
        Ok(updated)
    }

    pub fn delete_category(&self, id: &str) -> AppResult<Category> {
        let removed = self.storage.categories.remove(id)?;
        self.notifications.notify(
            format!("Category \"{}\" deleted.", removed.name),
            NotificationKind::Info,
        )?;
        Ok(removed)
    }

    // --- Work units ---

    pub fn work_units(&self) -> AppResult<Vec<WorkUnit>> {
        self.storage.work_units.list()
    }

    pub fn create_work_unit(&self, payload: CreateWorkUnit) -> AppResult<WorkUnit> {
        payload.validate()?;
        self.check_unit_unique(&payload.name, None)?;
        let unit = WorkUnit {
            id: new_id(),
            name: payload.name,
            code: payload.code,
        };
        let unit = self.storage.work_units.insert(unit)?;
        self.notifications.notify(
            format!("Work unit \"{}\" added.", unit.name),
            NotificationKind::Success,
        )?;
        Ok(unit)
    }

    pub fn update_work_unit(&self, id: &str, payload: CreateWorkUnit) -> AppResult<WorkUnit> {
        payload.validate()?;
        self.check_unit_unique(&payload.name, Some(id))?;
        let updated = self.storage.work_units.replace(
            id,
            WorkUnit {
                id: id.to_string(),
                name: payload.name,
                code: payload.code,
            },
        )?;
        self.notifications.notify(
            format!("Work unit \"{}\" updated.", updated.name),
            NotificationKind::Success,
        )?;
        Ok(updated)
    }

    pub fn delete_work_unit(&self, id: &str) -> AppResult<WorkUnit> {
        let removed = self.storage.work_units.remove(id)?;
        self.notifications.notify(
            format!("Work unit \"{}\" deleted.", removed.name),
            NotificationKind::Info,
        )?;
        Ok(removed)
    }

    fn check_category_unique(&self, name: &str, exclude_id: Option<&str>) -> AppResult<()> {
        let taken = self.storage.categories.read(|categories| {
            categories
                .iter()
                .any(|c| c.name.eq_ignore_ascii_case(name) && Some(c.id.as_str()) != exclude_id)
        })?;
        if taken {
            return Err(AppError::Conflict(format!(
                "Category {} already exists",
                name
            )));
        }
        Ok(())
    }

    fn check_unit_unique(&self, name: &str, exclude_id: Option<&str>) -> AppResult<()> {
        let taken = self.storage.work_units.read(|units| {
            units
                .iter()
                .any(|u| u.name.eq_ignore_ascii_case(name) && Some(u.id.as_str()) != exclude_id)
        })?;
        if taken {
            return Err(AppError::Conflict(format!(
                "Work unit {} already exists",
                name
            )));
        }
        Ok(())
    }
}
