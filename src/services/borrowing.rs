//! Borrowing workflow: submit, approve, reject, return.
//!
//! The asset status transition on approval is the tie-break point when two
//! pending requests target the same asset: whichever approval flips the
//! asset from `Available` to `Borrowed` first wins, the other fails.

use chrono::{NaiveDate, Utc};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::borrowing::CreateBorrowing;
use crate::models::{new_id, AssetStatus, BorrowingRecord, BorrowingStatus, NotificationKind};
use crate::storage::Storage;

use super::notifications::NotificationService;

#[derive(Clone)]
pub struct BorrowingService {
    storage: Storage,
    notifications: NotificationService,
}

impl BorrowingService {
    pub fn new(storage: Storage, notifications: NotificationService) -> Self {
        Self {
            storage,
            notifications,
        }
    }

    pub fn list(&self) -> AppResult<Vec<BorrowingRecord>> {
        self.storage.borrowing.list()
    }

    pub fn get(&self, id: &str) -> AppResult<Option<BorrowingRecord>> {
        self.storage.borrowing.get(id)
    }

    /// Case-insensitive substring search over asset and borrower names
    pub fn search(&self, term: &str) -> AppResult<Vec<BorrowingRecord>> {
        let needle = term.to_lowercase();
        self.storage.borrowing.read(|records| {
            records
                .iter()
                .filter(|r| {
                    r.asset_name.to_lowercase().contains(&needle)
                        || r.borrower_name.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect()
        })
    }

    /// Active records past their due date as of `today`
    pub fn overdue(&self, today: NaiveDate) -> AppResult<Vec<BorrowingRecord>> {
        self.storage.borrowing.read(|records| {
            records
                .iter()
                .filter(|r| r.is_overdue(today))
                .cloned()
                .collect()
        })
    }

    /// File a borrowing request. The record starts in `PendingApproval` and
    /// the asset is left untouched until an approval lands.
    pub fn submit(&self, payload: CreateBorrowing) -> AppResult<BorrowingRecord> {
        payload.validate()?;
        if payload.due_date < payload.borrow_date {
            return Err(AppError::Validation(
                "Due date cannot be before the borrow date".to_string(),
            ));
        }

        let asset = self
            .storage
            .assets
            .get(&payload.asset_id)?
            .ok_or_else(|| AppError::NotFound(format!("No asset with id {}", payload.asset_id)))?;
        if asset.status != AssetStatus::Available {
            return Err(AppError::BusinessRule(
                "Asset is not available for borrowing".to_string(),
            ));
        }

        let record = BorrowingRecord {
            id: new_id(),
            asset_id: asset.id.clone(),
            asset_name: asset.name.clone(),
            borrower_name: payload.borrower_name,
            borrower_unit: payload.borrower_unit,
            borrow_date: payload.borrow_date,
            due_date: payload.due_date,
            return_date: None,
            status: BorrowingStatus::PendingApproval,
            notes: payload.notes,
        };
        let record = self.storage.borrowing.insert(record)?;

        tracing::info!(record_id = %record.id, asset = %record.asset_name, "borrowing request submitted");
        self.notifications.notify(
            format!(
                "Borrowing request for \"{}\" submitted and awaiting approval.",
                record.asset_name
            ),
            NotificationKind::Info,
        )?;
        Ok(record)
    }

    /// Approve a pending request, marking the asset as borrowed.
    ///
    /// The asset flip is a compare-and-swap inside a single collection
    /// mutation; a second approval against the same asset sees it already
    /// `Borrowed` and fails without touching anything.
    pub fn approve(&self, record_id: &str) -> AppResult<BorrowingRecord> {
        let record = self.require(record_id)?;
        if record.status != BorrowingStatus::PendingApproval {
            return Err(AppError::BusinessRule(
                "Only pending requests can be approved".to_string(),
            ));
        }

        let flipped = self.storage.assets.with_mut(|assets| {
            Ok(match assets.iter_mut().find(|a| a.id == record.asset_id) {
                Some(asset) if asset.status == AssetStatus::Available => {
                    asset.status = AssetStatus::Borrowed;
                    true
                }
                _ => false,
            })
        })?;
        if !flipped {
            self.notifications.notify(
                format!(
                    "Cannot approve: \"{}\" is no longer available.",
                    record.asset_name
                ),
                NotificationKind::Error,
            )?;
            return Err(AppError::BusinessRule(
                "Asset is no longer available".to_string(),
            ));
        }

        let updated = match self.storage.borrowing.update(record_id, |r| {
            r.status = BorrowingStatus::Active;
            Ok(())
        }) {
            Ok(updated) => updated,
            Err(e) => {
                // Release the asset again so no borrowed asset is left
                // without an active record
                if self
                    .storage
                    .assets
                    .update(&record.asset_id, |a| {
                        a.status = AssetStatus::Available;
                        Ok(())
                    })
                    .is_err()
                {
                    tracing::error!(record_id, "failed to release asset after approval error");
                }
                return Err(e);
            }
        };

        tracing::info!(record_id, asset = %updated.asset_name, "borrowing approved");
        self.notifications.notify(
            format!("Borrowing of \"{}\" approved.", updated.asset_name),
            NotificationKind::Success,
        )?;
        Ok(updated)
    }

    /// Reject a pending request. Rejection never touches the asset, so it is
    /// valid regardless of the asset's current status.
    pub fn reject(&self, record_id: &str) -> AppResult<BorrowingRecord> {
        let record = self.require(record_id)?;
        if record.status != BorrowingStatus::PendingApproval {
            return Err(AppError::BusinessRule(
                "Only pending requests can be rejected".to_string(),
            ));
        }

        let updated = self.storage.borrowing.update(record_id, |r| {
            r.status = BorrowingStatus::Rejected;
            Ok(())
        })?;

        tracing::info!(record_id, asset = %updated.asset_name, "borrowing rejected");
        self.notifications.notify(
            format!("Borrowing request for \"{}\" rejected.", updated.asset_name),
            NotificationKind::Info,
        )?;
        Ok(updated)
    }

    /// Close an active borrowing: stamp today's date as the return date and
    /// put the asset back in circulation.
    pub fn return_asset(&self, record_id: &str) -> AppResult<BorrowingRecord> {
        let record = self.require(record_id)?;
        if record.status != BorrowingStatus::Active {
            return Err(AppError::BusinessRule(
                "Only active borrowings can be returned".to_string(),
            ));
        }

        let today = Utc::now().date_naive();
        let updated = self.storage.borrowing.update(record_id, |r| {
            r.status = BorrowingStatus::Returned;
            r.return_date = Some(today);
            Ok(())
        })?;

        // The asset may have been deleted while on loan; the return still
        // completes in that case.
        match self.storage.assets.update(&record.asset_id, |a| {
            a.status = AssetStatus::Available;
            Ok(())
        }) {
            Ok(_) | Err(AppError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        tracing::info!(record_id, asset = %updated.asset_name, "asset returned");
        self.notifications.notify(
            format!("\"{}\" returned and available again.", updated.asset_name),
            NotificationKind::Success,
        )?;
        Ok(updated)
    }

    fn require(&self, record_id: &str) -> AppResult<BorrowingRecord> {
        self.storage
            .borrowing
            .get(record_id)?
            .ok_or_else(|| AppError::NotFound(format!("No borrowing record with id {}", record_id)))
    }
}
