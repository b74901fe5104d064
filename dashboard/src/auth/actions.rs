//! Auth slice actions.

use finboard_core::entities::User;
use finboard_core::{ActionName, ApiError};

/// Actions owned by the auth slice.
///
/// The asynchronous user-fetch follows the mandatory intent / ok / error
/// triplet; success and failure are distinct variants, never a status field.
#[derive(Debug, Clone)]
pub enum AuthAction {
    /// Fetch (or re-validate) the current session user
    GetUser,
    /// The session user was fetched successfully
    GetUserOk {
        /// The authenticated user
        user: User,
    },
    /// The session user fetch failed
    GetUserError {
        /// The failure; a 401 means "not logged in" rather than an error
        error: ApiError,
    },
}

impl ActionName for AuthAction {
    fn name(&self) -> &'static str {
        match self {
            AuthAction::GetUser => "[Auth] get user",
            AuthAction::GetUserOk { .. } => "[Auth] get user ok",
            AuthAction::GetUserError { .. } => "[Auth] get user error",
        }
    }
}
