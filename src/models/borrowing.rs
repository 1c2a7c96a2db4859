//! Borrowing (loan request) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::BorrowingStatus;
use crate::storage::Entity;

/// A request/approval/return lifecycle for temporary custody of an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowingRecord {
    pub id: String,
    pub asset_id: String,
    /// Asset name snapshot taken at submission time
    pub asset_name: String,
    pub borrower_name: String,
    /// Work unit of the borrower, referenced by name
    pub borrower_unit: String,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
    pub status: BorrowingStatus,
    pub notes: String,
}

impl BorrowingRecord {
    /// Derived display flag: an active loan past its due date.
    /// Never persisted as a status of its own.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == BorrowingStatus::Active && self.due_date < today
    }
}

impl Entity for BorrowingRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Submit borrowing request payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBorrowing {
    pub asset_id: String,
    #[validate(length(min = 3, message = "Borrower name must be at least 3 characters"))]
    pub borrower_name: String,
    #[validate(length(min = 1, message = "Borrower work unit is required"))]
    pub borrower_unit: String,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}
