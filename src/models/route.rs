//! Hash-route navigation surface and per-role access rules

use super::user::UserRole;

const ALL_ROLES: &[UserRole] = &[
    UserRole::Admin,
    UserRole::Officer,
    UserRole::Leader,
    UserRole::UnitUser,
];

/// Application routes, one per screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Assets,
    Locations,
    Maintenance,
    Borrowing,
    Reports,
    Users,
    Help,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Dashboard,
        Route::Assets,
        Route::Locations,
        Route::Maintenance,
        Route::Borrowing,
        Route::Reports,
        Route::Users,
        Route::Help,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Assets => "/assets",
            Route::Locations => "/locations",
            Route::Maintenance => "/maintenance",
            Route::Borrowing => "/borrowing",
            Route::Reports => "/reports",
            Route::Users => "/users",
            Route::Help => "/help",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|r| r.path() == path)
    }

    /// Roles listed in the navigation sidebar for this route
    pub fn allowed_roles(&self) -> &'static [UserRole] {
        match self {
            Route::Dashboard | Route::Assets | Route::Help => ALL_ROLES,
            Route::Locations => &[UserRole::Admin, UserRole::Officer],
            Route::Maintenance | Route::Borrowing => {
                &[UserRole::Admin, UserRole::Officer, UserRole::UnitUser]
            }
            Route::Reports => &[UserRole::Admin, UserRole::Officer, UserRole::Leader],
            Route::Users => &[UserRole::Admin],
        }
    }

    pub fn visible_to(&self, role: UserRole) -> bool {
        self.allowed_roles().contains(&role)
    }
}

/// Resolve a requested path for a role. Unknown paths fall back to the
/// dashboard; the users screen redirects non-admins to the dashboard.
pub fn resolve(path: &str, role: UserRole) -> Route {
    let route = Route::from_path(path).unwrap_or(Route::Dashboard);
    if route == Route::Users && role != UserRole::Admin {
        return Route::Dashboard;
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_paths_redirect_to_dashboard() {
        assert_eq!(resolve("/does-not-exist", UserRole::Admin), Route::Dashboard);
    }

    #[test]
    fn users_screen_is_admin_only() {
        assert_eq!(resolve("/users", UserRole::Admin), Route::Users);
        assert_eq!(resolve("/users", UserRole::Officer), Route::Dashboard);
        assert_eq!(resolve("/users", UserRole::UnitUser), Route::Dashboard);
    }

    #[test]
    fn leader_sees_reports_but_not_borrowing() {
        assert!(Route::Reports.visible_to(UserRole::Leader));
        assert!(!Route::Borrowing.visible_to(UserRole::Leader));
    }
}
