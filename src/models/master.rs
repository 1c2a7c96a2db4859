//! Master/reference data: locations, categories, work units.
//!
//! Assets and borrowing records reference these by *name*, not id. Renames
//! and deletes intentionally do not cascade; dangling references are left
//! as-is for compatibility with the persisted data layout.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::storage::Entity;

/// A physical room within a building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub building: String,
    pub room: String,
}

impl Entity for Location {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocation {
    #[validate(length(min = 1, message = "Building is required"))]
    pub building: String,
    #[validate(length(min = 1, message = "Room is required"))]
    pub room: String,
}

/// An asset category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Entity for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    #[validate(length(min = 1, message = "Category name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// An organizational subdivision (department/study program), used both as
/// asset location classifier and borrower affiliation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkUnit {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Entity for WorkUnit {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkUnit {
    #[validate(length(min = 1, message = "Work unit name is required"))]
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}
