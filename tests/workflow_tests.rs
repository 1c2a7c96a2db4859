//! End-to-end tests for the borrowing workflow and account handling,
//! running against a real JSON store in a temp directory.

use chrono::NaiveDate;
use tempfile::TempDir;

use sarpras::config::{AppConfig, LoggingConfig, NotificationsConfig, StorageConfig};
use sarpras::error::AppError;
use sarpras::models::borrowing::CreateBorrowing;
use sarpras::models::user::{Credentials, UpdateUser};
use sarpras::models::{AssetStatus, BorrowingStatus, UserRole};
use sarpras::AppState;

fn state(dir: &TempDir) -> AppState {
    let config = AppConfig {
        storage: StorageConfig {
            data_dir: dir.path().join("data"),
        },
        notifications: NotificationsConfig::default(),
        logging: LoggingConfig::default(),
    };
    AppState::new(config).expect("state should open")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn request(asset_id: &str) -> CreateBorrowing {
    CreateBorrowing {
        asset_id: asset_id.to_string(),
        borrower_name: "Budi Santoso".to_string(),
        borrower_unit: "Manajemen".to_string(),
        borrow_date: date(2024, 4, 1),
        due_date: date(2024, 4, 5),
        notes: String::new(),
    }
}

#[test]
fn first_run_seeds_every_collection() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    assert_eq!(app.services.assets.list().unwrap().len(), 3);
    assert_eq!(app.services.users.list().unwrap().len(), 4);
    assert_eq!(app.services.master.work_units().unwrap().len(), 8);
    assert_eq!(app.services.master.locations().unwrap().len(), 4);
    assert_eq!(app.services.master.categories().unwrap().len(), 3);
    assert_eq!(app.services.borrowing.list().unwrap().len(), 1);
    assert_eq!(app.services.maintenance.list().unwrap().len(), 1);

    // A second open against the same directory reads, not re-seeds
    let reopened = state(&dir);
    assert_eq!(reopened.services.assets.list().unwrap().len(), 3);
}

#[test]
fn submit_leaves_asset_untouched_until_approval() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let record = app.services.borrowing.submit(request("1")).unwrap();
    assert_eq!(record.status, BorrowingStatus::PendingApproval);
    assert_eq!(record.asset_name, "Proyektor Epson EB-X400");
    assert!(record.return_date.is_none());

    let asset = app.services.assets.get("1").unwrap().unwrap();
    assert_eq!(asset.status, AssetStatus::Available);
}

#[test]
fn submit_rejects_due_date_before_borrow_date() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let mut payload = request("1");
    payload.due_date = date(2024, 3, 31);
    let err = app.services.borrowing.submit(payload).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(app.services.borrowing.list().unwrap().len(), 1);
}

#[test]
fn submit_rejects_unavailable_asset() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    // Asset 3 is seeded as already borrowed
    let err = app.services.borrowing.submit(request("3")).unwrap_err();
    assert!(matches!(err, AppError::BusinessRule(_)));
}

#[test]
fn approval_activates_record_and_borrows_asset() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let record = app.services.borrowing.submit(request("1")).unwrap();
    let approved = app.services.borrowing.approve(&record.id).unwrap();
    assert_eq!(approved.status, BorrowingStatus::Active);

    let asset = app.services.assets.get("1").unwrap().unwrap();
    assert_eq!(asset.status, AssetStatus::Borrowed);

    // Exactly one active record references the borrowed asset
    let active: Vec<_> = app
        .services
        .borrowing
        .list()
        .unwrap()
        .into_iter()
        .filter(|r| r.asset_id == "1" && r.status == BorrowingStatus::Active)
        .collect();
    assert_eq!(active.len(), 1);
}

#[test]
fn second_approval_for_same_asset_loses_the_race() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let first = app.services.borrowing.submit(request("1")).unwrap();
    let second = app.services.borrowing.submit(request("1")).unwrap();

    app.services.borrowing.approve(&first.id).unwrap();
    let err = app.services.borrowing.approve(&second.id).unwrap_err();
    assert!(matches!(err, AppError::BusinessRule(_)));

    // The loser stays pending and the asset stays borrowed once
    let loser = app.services.borrowing.get(&second.id).unwrap().unwrap();
    assert_eq!(loser.status, BorrowingStatus::PendingApproval);
    let asset = app.services.assets.get("1").unwrap().unwrap();
    assert_eq!(asset.status, AssetStatus::Borrowed);
}

#[test]
fn rejection_never_touches_the_asset() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let record = app.services.borrowing.submit(request("1")).unwrap();
    let rejected = app.services.borrowing.reject(&record.id).unwrap();
    assert_eq!(rejected.status, BorrowingStatus::Rejected);

    let asset = app.services.assets.get("1").unwrap().unwrap();
    assert_eq!(asset.status, AssetStatus::Available);

    // Terminal: a rejected record cannot be approved afterwards
    assert!(app.services.borrowing.approve(&record.id).is_err());
}

#[test]
fn return_stamps_date_and_frees_asset_once() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let record = app.services.borrowing.submit(request("1")).unwrap();
    app.services.borrowing.approve(&record.id).unwrap();

    let returned = app.services.borrowing.return_asset(&record.id).unwrap();
    assert_eq!(returned.status, BorrowingStatus::Returned);
    assert!(returned.return_date.is_some());

    let asset = app.services.assets.get("1").unwrap().unwrap();
    assert_eq!(asset.status, AssetStatus::Available);

    let err = app.services.borrowing.return_asset(&record.id).unwrap_err();
    assert!(matches!(err, AppError::BusinessRule(_)));
}

#[test]
fn failed_approval_releases_the_asset() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let record = app.services.borrowing.submit(request("1")).unwrap();

    // Make the borrowing file unwritable so the record update fails after
    // the asset has already been flipped
    let path = dir.path().join("data").join("borrowing.json");
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    let err = app.services.borrowing.approve(&record.id).unwrap_err();
    assert!(matches!(err, AppError::Storage(_)));

    // No borrowed asset without an active record: the flip was undone and
    // the request is still pending
    let asset = app.services.assets.get("1").unwrap().unwrap();
    assert_eq!(asset.status, AssetStatus::Available);
    let pending = app.services.borrowing.get(&record.id).unwrap().unwrap();
    assert_eq!(pending.status, BorrowingStatus::PendingApproval);
}

#[test]
fn overdue_is_derived_from_active_records_only() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    // The seeded record b1 is active with due date 2024-03-15
    let overdue = app.services.borrowing.overdue(date(2024, 4, 1)).unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].id, "b1");

    assert!(app
        .services
        .borrowing
        .overdue(date(2024, 3, 15))
        .unwrap()
        .is_empty());
}

#[test]
fn login_accepts_seeded_account_and_rejects_bad_password() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let user = app
        .services
        .users
        .login(&Credentials {
            username: "admin".to_string(),
            password: "admin".to_string(),
        })
        .unwrap();
    assert_eq!(user.name, "Admin Pusat");
    assert_eq!(app.services.users.current().unwrap().unwrap().id, user.id);

    app.services.users.logout().unwrap();
    assert!(app.services.users.current().unwrap().is_none());

    let err = app
        .services
        .users
        .login(&Credentials {
            username: "admin".to_string(),
            password: "wrong".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, AppError::Authentication(_)));
}

#[test]
fn demo_account_still_works_when_store_entry_is_gone() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    app.services.users.delete("1").unwrap();
    let user = app
        .services
        .users
        .login(&Credentials {
            username: "admin".to_string(),
            password: "admin".to_string(),
        })
        .unwrap();
    assert_eq!(user.username, "admin");
    // The bootstrap identity, not the deleted stored account
    assert_eq!(user.name, "Administrator");
    assert_eq!(user.role, UserRole::Admin);
}

#[test]
fn demo_credentials_survive_a_stored_password_change() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    app.services
        .users
        .update(
            "1",
            UpdateUser {
                username: "admin".to_string(),
                password: Some("s3cret".to_string()),
                name: "Admin Pusat".to_string(),
                role: UserRole::Admin,
                study_program: "Manajemen".to_string(),
                position: Some("Kepala BAUK".to_string()),
            },
        )
        .unwrap();

    // The changed password works against the stored account
    let stored = app
        .services
        .users
        .login(&Credentials {
            username: "admin".to_string(),
            password: "s3cret".to_string(),
        })
        .unwrap();
    assert_eq!(stored.name, "Admin Pusat");

    // The demo credentials still open a session on the bootstrap identity
    let demo = app
        .services
        .users
        .login(&Credentials {
            username: "admin".to_string(),
            password: "admin".to_string(),
        })
        .unwrap();
    assert_eq!(demo.name, "Administrator");
}

#[test]
fn deleting_own_account_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    app.services
        .users
        .login(&Credentials {
            username: "admin".to_string(),
            password: "admin".to_string(),
        })
        .unwrap();

    let err = app.services.users.delete("1").unwrap_err();
    assert!(matches!(err, AppError::BusinessRule(_)));
    assert!(app.services.users.get("1").unwrap().is_some());
}

#[test]
fn workflow_steps_emit_notifications() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let record = app.services.borrowing.submit(request("1")).unwrap();
    app.services.borrowing.approve(&record.id).unwrap();

    let entries = app.services.notifications.list().unwrap();
    assert!(entries
        .iter()
        .any(|n| n.message.contains("approved")));
    assert!(app.services.notifications.unread_count().unwrap() >= 2);

    app.services.notifications.mark_all_read().unwrap();
    assert_eq!(app.services.notifications.unread_count().unwrap(), 0);
}
