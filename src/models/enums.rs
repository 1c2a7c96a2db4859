//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AssetCondition
// ---------------------------------------------------------------------------

/// Physical condition of an asset, independent of its borrowing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetCondition {
    Good,
    LightDamage,
    HeavyDamage,
}

impl AssetCondition {
    pub const ALL: [AssetCondition; 3] = [
        AssetCondition::Good,
        AssetCondition::LightDamage,
        AssetCondition::HeavyDamage,
    ];

    pub fn is_damaged(&self) -> bool {
        !matches!(self, AssetCondition::Good)
    }
}

impl std::fmt::Display for AssetCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AssetCondition::Good => "Good",
            AssetCondition::LightDamage => "Light Damage",
            AssetCondition::HeavyDamage => "Heavy Damage",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Availability state of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    Available,
    Borrowed,
    UnderRepair,
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AssetStatus::Available => "Available",
            AssetStatus::Borrowed => "Borrowed",
            AssetStatus::UnderRepair => "Under Repair",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// BorrowingStatus
// ---------------------------------------------------------------------------

/// Stored lifecycle state of a borrowing record.
///
/// An overdue loan stays `Active` in storage; lateness is derived from the
/// due date at display time (`BorrowingRecord::is_overdue`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorrowingStatus {
    PendingApproval,
    Active,
    Returned,
    Rejected,
}

impl BorrowingStatus {
    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, BorrowingStatus::Returned | BorrowingStatus::Rejected)
    }
}

impl std::fmt::Display for BorrowingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BorrowingStatus::PendingApproval => "Pending Approval",
            BorrowingStatus::Active => "Active",
            BorrowingStatus::Returned => "Returned",
            BorrowingStatus::Rejected => "Rejected",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceType
// ---------------------------------------------------------------------------

/// Maintenance record classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceType {
    Routine,
    Repair,
    Replacement,
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceType::Routine => "Routine",
            MaintenanceType::Repair => "Repair",
            MaintenanceType::Replacement => "Replacement",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    InProgress,
    Done,
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Done => "Done",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// NotificationKind
// ---------------------------------------------------------------------------

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        };
        write!(f, "{}", label)
    }
}
