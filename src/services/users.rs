//! Account management and session handling.
//!
//! Authentication is a plain-text comparison by contract with the persisted
//! data layout. Accounts without a stored password fall back to the
//! username as password. A fixed set of demo accounts is always accepted,
//! whatever the user store holds; a matching stored account wins first.

use once_cell::sync::Lazy;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::user::{CreateUser, Credentials, UpdateUser};
use crate::models::{new_id, NotificationKind, User, UserRole};
use crate::storage::Storage;

use super::notifications::NotificationService;

/// Bootstrap accounts guaranteeing that each role stays reachable
static DEMO_ACCOUNTS: Lazy<Vec<User>> = Lazy::new(|| {
    let account = |id: &str, username: &str, name: &str, role, study_program: &str| User {
        id: id.to_string(),
        username: username.to_string(),
        password: Some(username.to_string()),
        name: name.to_string(),
        role,
        study_program: study_program.to_string(),
        position: None,
    };
    vec![
        account("1", "admin", "Administrator", UserRole::Admin, "Manajemen"),
        account("2", "petugas", "Petugas Sarpras", UserRole::Officer, "Sarpras Pusat"),
        account("3", "pimpinan", "Pimpinan Universitas", UserRole::Leader, "Rektorat"),
        account("4", "user", "User Unit Kerja", UserRole::UnitUser, "Teknik Informatika"),
    ]
});

#[derive(Clone)]
pub struct UsersService {
    storage: Storage,
    notifications: NotificationService,
}

impl UsersService {
    pub fn new(storage: Storage, notifications: NotificationService) -> Self {
        Self {
            storage,
            notifications,
        }
    }

    pub fn list(&self) -> AppResult<Vec<User>> {
        self.storage.users.list()
    }

    pub fn get(&self, id: &str) -> AppResult<Option<User>> {
        self.storage.users.get(id)
    }

    /// Currently logged-in user, if any
    pub fn current(&self) -> AppResult<Option<User>> {
        self.storage.session.current()
    }

    /// Check credentials and open a session.
    ///
    /// The stored account wins over the demo fallback when both match the
    /// submitted username.
    pub fn login(&self, credentials: &Credentials) -> AppResult<User> {
        let stored = self.storage.users.read(|users| {
            users
                .iter()
                .find(|u| u.username == credentials.username)
                .cloned()
        })?;

        if let Some(user) = stored {
            let expected = user.password.clone().unwrap_or_else(|| user.username.clone());
            if credentials.password == expected {
                return self.open_session(user);
            }
        }

        // The demo table is consulted on any stored-account miss, including
        // a wrong password against an existing account
        if let Some(demo) = DEMO_ACCOUNTS.iter().find(|u| {
            u.username == credentials.username
                && u.password.as_deref() == Some(credentials.password.as_str())
        }) {
            return self.open_session(demo.clone());
        }

        tracing::warn!(username = %credentials.username, "login rejected");
        Err(AppError::Authentication(
            "Invalid username or password".to_string(),
        ))
    }

    pub fn logout(&self) -> AppResult<()> {
        self.storage.session.clear()?;
        tracing::info!("session closed");
        Ok(())
    }

    pub fn create(&self, payload: CreateUser) -> AppResult<User> {
        payload.validate()?;
        self.check_username_unique(&payload.username, None)?;

        let user = User {
            id: new_id(),
            username: payload.username,
            password: Some(payload.password),
            name: payload.name,
            role: payload.role,
            study_program: payload.study_program,
            position: payload.position,
        };
        let user = self.storage.users.insert(user)?;

        tracing::info!(user_id = %user.id, username = %user.username, "user created");
        self.notifications.notify(
            format!("Account \"{}\" created.", user.username),
            NotificationKind::Success,
        )?;
        Ok(user)
    }

    /// Edit an account. A `None` password in the payload keeps the stored one.
    pub fn update(&self, id: &str, payload: UpdateUser) -> AppResult<User> {
        payload.validate()?;
        self.check_username_unique(&payload.username, Some(id))?;

        let existing = self
            .storage
            .users
            .get(id)?
            .ok_or_else(|| AppError::NotFound(format!("No user with id {}", id)))?;

        let updated = User {
            id: existing.id,
            username: payload.username,
            password: payload.password.or(existing.password),
            name: payload.name,
            role: payload.role,
            study_program: payload.study_program,
            position: payload.position,
        };
        let updated = self.storage.users.replace(id, updated)?;

        // Keep the open session in step when the logged-in user edits itself
        if let Some(current) = self.storage.session.current()? {
            if current.id == updated.id {
                self.storage.session.set(updated.clone())?;
            }
        }

        self.notifications.notify(
            format!("Account \"{}\" updated.", updated.username),
            NotificationKind::Success,
        )?;
        Ok(updated)
    }

    /// Remove an account. Deleting the account of the open session is
    /// refused so the operator cannot lock themselves out mid-session.
    pub fn delete(&self, id: &str) -> AppResult<User> {
        if let Some(current) = self.storage.session.current()? {
            if current.id == id {
                self.notifications.notify(
                    "You cannot delete your own account.",
                    NotificationKind::Error,
                )?;
                return Err(AppError::BusinessRule(
                    "You cannot delete your own account".to_string(),
                ));
            }
        }

        let removed = self.storage.users.remove(id)?;
        tracing::info!(user_id = id, username = %removed.username, "user deleted");
        self.notifications.notify(
            format!("Account \"{}\" removed from the system.", removed.username),
            NotificationKind::Info,
        )?;
        Ok(removed)
    }

    fn open_session(&self, user: User) -> AppResult<User> {
        self.storage.session.set(user.clone())?;
        tracing::info!(username = %user.username, role = %user.role, "login ok");
        self.notifications.notify(
            format!("Welcome back, {}!", user.name),
            NotificationKind::Success,
        )?;
        Ok(user)
    }

    fn check_username_unique(&self, username: &str, exclude_id: Option<&str>) -> AppResult<()> {
        let taken = self.storage.users.read(|users| {
            users
                .iter()
                .any(|u| u.username == username && Some(u.id.as_str()) != exclude_id)
        })?;
        if taken {
            return Err(AppError::Conflict(format!(
                "Username {} is already taken",
                username
            )));
        }
        Ok(())
    }
}
