//! Auth slice state and selectors.

use finboard_core::ApiError;
use finboard_core::entities::User;

/// Session lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Nothing fetched yet
    #[default]
    Empty,
    /// A user fetch is in flight
    Loading,
    /// A valid session exists
    LoggedIn,
    /// The server answered 401: no session. A terminal, non-error state.
    NotLoggedIn,
    /// The user fetch failed for any other reason
    Error,
}

/// Auth slice state.
///
/// Invariant: `user` is `Some` iff `status == LoggedIn`. The state resets
/// only with a full reload; there is no explicit logout action in scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// Session lifecycle status
    pub status: AuthStatus,
    /// The authenticated user, present iff logged in
    pub user: Option<User>,
    /// Last fetch failure, if any
    pub error: Option<ApiError>,
}

impl AuthState {
    /// Whether a valid session exists.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.status == AuthStatus::LoggedIn
    }

    /// The current user, if logged in.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
