//! Transient in-app notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::NotificationKind;

/// A transient message shown as a toast and listed in the notification panel.
/// Not persisted; the sink keeps a bounded in-memory list only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppNotification {
    pub id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}
