//! User model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::storage::Entity;

/// Access roles, from full administration down to unit-level self service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Officer,
    Leader,
    UnitUser,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Officer => "OFFICER",
            UserRole::Leader => "LEADER",
            UserRole::UnitUser => "UNIT_USER",
        }
    }

    /// Submission of borrowing requests and maintenance records
    pub fn can_submit_requests(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Officer | UserRole::UnitUser)
    }

    /// Approval/rejection/return processing of borrowing requests
    pub fn can_process_borrowing(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Officer)
    }

    /// Locations, categories and work units
    pub fn can_manage_master_data(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Officer)
    }

    pub fn can_view_reports(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Officer | UserRole::Leader)
    }

    pub fn can_manage_users(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An application account.
///
/// Passwords are stored and compared in plain text by contract; legacy
/// records without a password authenticate with the username itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub name: String,
    pub role: UserRole,
    pub study_program: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Create user payload; password is mandatory on creation
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(min = 4, message = "Username must be at least 4 characters"))]
    pub username: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
    #[validate(length(min = 3, message = "Full name must be at least 3 characters"))]
    pub name: String,
    pub role: UserRole,
    pub study_program: String,
    #[serde(default)]
    pub position: Option<String>,
}

/// Update user payload; a `None` password keeps the stored one
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(length(min = 4, message = "Username must be at least 4 characters"))]
    pub username: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: Option<String>,
    #[validate(length(min = 3, message = "Full name must be at least 3 characters"))]
    pub name: String,
    pub role: UserRole,
    pub study_program: String,
    #[serde(default)]
    pub position: Option<String>,
}

/// Submitted login credentials
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
