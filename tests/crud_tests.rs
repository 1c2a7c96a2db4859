//! CRUD behaviour of assets, maintenance, master data and the dashboard,
//! including persistence across a store reopen.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

use sarpras::config::{AppConfig, LoggingConfig, NotificationsConfig, StorageConfig};
use sarpras::error::AppError;
use sarpras::models::asset::CreateAsset;
use sarpras::models::maintenance::CreateMaintenance;
use sarpras::models::master::CreateWorkUnit;
use sarpras::models::{
    AssetCondition, AssetLocation, AssetStatus, MaintenanceStatus, MaintenanceType,
};
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

fn asset_payload(code: &str) -> CreateAsset {
    CreateAsset {
        code: code.to_string(),
        name: "Printer Epson L3210".to_string(),
        category: "Elektronik".to_string(),
        asset_type: "Office Equipment".to_string(),
        location: AssetLocation {
            building: "Gedung A".to_string(),
            room: "Laboratorium 1".to_string(),
            study_program: "Teknik Informatika".to_string(),
        },
        condition: AssetCondition::Good,
        purchase_date: date(2024, 2, 1),
        price: Decimal::from(2_750_000),
    }
}

#[test]
fn created_asset_starts_available_and_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let asset = app.services.assets.create(asset_payload("AST-100")).unwrap();
    assert_eq!(asset.status, AssetStatus::Available);

    drop(app);
    let reopened = state(&dir);
    let found = reopened.services.assets.get(&asset.id).unwrap().unwrap();
    assert_eq!(found.code, "AST-100");
    assert_eq!(found.price, Decimal::from(2_750_000));
}

#[test]
fn duplicate_asset_code_is_a_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    // AST-001 is seeded
    let err = app
        .services
        .assets
        .create(asset_payload("AST-001"))
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // Updating an asset to its own code stays legal
    let existing = app.services.assets.get("1").unwrap().unwrap();
    let mut payload = asset_payload("AST-001");
    payload.name = existing.name.clone();
    assert!(app.services.assets.update("1", payload).is_ok());
}

#[test]
fn asset_update_keeps_workflow_owned_status() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    // Asset 3 is seeded as borrowed; an edit must not free it
    let updated = app
        .services
        .assets
        .update("3", asset_payload("AST-300"))
        .unwrap();
    assert_eq!(updated.status, AssetStatus::Borrowed);
    assert_eq!(updated.name, "Printer Epson L3210");
}

#[test]
fn non_positive_price_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let mut payload = asset_payload("AST-101");
    payload.price = Decimal::ZERO;
    let err = app.services.assets.create(payload).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn short_fields_surface_validation_messages() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let mut payload = asset_payload("AS");
    payload.name = "PC".to_string();
    let err = app.services.assets.create(payload).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Asset code must be at least 3 characters"));
    assert!(message.contains("Asset name must be at least 3 characters"));
}

#[test]
fn maintenance_snapshots_asset_name_and_completes() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let record = app
        .services
        .maintenance
        .create(CreateMaintenance {
            asset_id: "1".to_string(),
            date: date(2024, 4, 2),
            description: "Lamp replacement".to_string(),
            maintenance_type: MaintenanceType::Repair,
            cost: Decimal::from(850_000),
            performed_by: "Vendor".to_string(),
            status: MaintenanceStatus::InProgress,
        })
        .unwrap();
    assert_eq!(record.asset_name, "Proyektor Epson EB-X400");

    let done = app.services.maintenance.mark_complete(&record.id).unwrap();
    assert_eq!(done.status, MaintenanceStatus::Done);
    // Idempotent on a completed record
    assert!(app.services.maintenance.mark_complete(&record.id).is_ok());
}

#[test]
fn maintenance_against_unknown_asset_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let err = app
        .services
        .maintenance
        .create(CreateMaintenance {
            asset_id: "missing".to_string(),
            date: date(2024, 4, 2),
            description: "Lamp replacement".to_string(),
            maintenance_type: MaintenanceType::Repair,
            cost: Decimal::from(850_000),
            performed_by: "Vendor".to_string(),
            status: MaintenanceStatus::InProgress,
        })
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn master_data_changes_do_not_cascade_into_assets() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    // "Teknik Informatika" is unit id 4 in the seed
    app.services
        .master
        .update_work_unit(
            "4",
            CreateWorkUnit {
                name: "Informatika".to_string(),
                code: None,
            },
        )
        .unwrap();

    // Asset 1 keeps the old unit name as a dangling reference
    let asset = app.services.assets.get("1").unwrap().unwrap();
    assert_eq!(asset.location.study_program, "Teknik Informatika");
}

#[test]
fn duplicate_work_unit_name_is_a_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let err = app
        .services
        .master
        .create_work_unit(CreateWorkUnit {
            name: "rektorat".to_string(),
            code: None,
        })
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[test]
fn asset_search_matches_name_and_code_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    assert_eq!(app.services.assets.search("proyektor").unwrap().len(), 1);
    assert_eq!(app.services.assets.search("ast-00").unwrap().len(), 3);
    assert!(app.services.assets.search("zzz").unwrap().is_empty());
}

#[test]
fn dashboard_reflects_the_seeded_data() {
    let dir = tempfile::tempdir().unwrap();
    let app = state(&dir);

    let stats = app.services.stats.dashboard().unwrap();
    assert_eq!(stats.total_assets, 3);
    assert_eq!(stats.active_borrowings, 1);
    assert_eq!(stats.maintenance_in_progress, 0);
    assert_eq!(stats.damaged_assets, 1);
    assert_eq!(stats.total_asset_value, Decimal::from(21_950_000));
    assert_eq!(stats.completed_maintenance_cost, Decimal::from(1_200_000));
    assert_eq!(stats.recent_borrowings.len(), 1);

    let good = stats
        .condition_breakdown
        .iter()
        .find(|c| c.condition == AssetCondition::Good)
        .unwrap();
    assert_eq!(good.count, 2);
}
