//! Auth slice reducer and effects.

use super::actions::AuthAction;
use super::environment::AuthEnvironment;
use super::state::{AuthState, AuthStatus};
use finboard_core::{CancelKey, Effect, Effects, Reducer, Route, smallvec};
use std::sync::Arc;

/// Cancellation key for the user fetch: re-dispatching `GetUser` while a
/// previous fetch is outstanding supersedes it (switch-latest).
pub const GET_USER_KEY: CancelKey = CancelKey::new("auth/get-user");

/// Reducer for the auth slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthReducer;

impl AuthReducer {
    /// Create the auth reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;
    type Environment = AuthEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            AuthAction::GetUser => {
                state.status = AuthStatus::Loading;

                let api = Arc::clone(&env.api);
                smallvec![Effect::Cancellable {
                    key: GET_USER_KEY,
                    future: Box::pin(async move {
                        Some(match api.fetch_session_user().await {
                            Ok(user) => AuthAction::GetUserOk { user },
                            Err(error) => AuthAction::GetUserError { error },
                        })
                    }),
                }]
            }
            AuthAction::GetUserOk { user } => {
                state.status = AuthStatus::LoggedIn;
                state.user = Some(user);
                state.error = None;
                smallvec![Effect::None]
            }
            AuthAction::GetUserError { error } => {
                state.user = None;

                if error.is_unauthorized() {
                    // No session: a distinguished terminal state, not an
                    // error screen. Route back to the landing page without
                    // dispatching anything.
                    state.status = AuthStatus::NotLoggedIn;
                    state.error = None;

                    let navigator = Arc::clone(&env.navigator);
                    smallvec![Effect::Future(Box::pin(async move {
                        navigator.navigate(Route::Root);
                        None
                    }))]
                } else {
                    state.status = AuthStatus::Error;
                    state.error = Some(error);
                    smallvec![Effect::None]
                }
            }
        }
    }
}
