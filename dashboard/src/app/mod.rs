//! Root composition: app-wide state, action and reducer.
//!
//! The slices stay independent; the one cross-slice rule lives here. A
//! successful session fetch kicks off the wallets fetch, so the auth slice
//! never has to know the finance slice exists.

use crate::auth::{AuthAction, AuthEnvironment, AuthReducer, AuthState};
use crate::finance::{FinanceAction, FinanceEnvironment, FinanceReducer, FinanceState};
use finboard_core::{ActionName, Effect, Effects, Reducer};

/// Composed application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Session slice
    pub auth: AuthState,
    /// Finance slice
    pub finance: FinanceState,
}

/// Composed application action.
#[derive(Debug, Clone)]
pub enum AppAction {
    /// An action owned by the auth slice
    Auth(AuthAction),
    /// An action owned by the finance slice
    Finance(FinanceAction),
}

impl ActionName for AppAction {
    fn name(&self) -> &'static str {
        match self {
            AppAction::Auth(action) => action.name(),
            AppAction::Finance(action) => action.name(),
        }
    }
}

/// Composed application environment.
#[derive(Debug, Clone)]
pub struct AppEnvironment {
    /// Auth slice dependencies
    pub auth: AuthEnvironment,
    /// Finance slice dependencies
    pub finance: FinanceEnvironment,
}

impl AppEnvironment {
    /// Create the composed environment.
    #[must_use]
    pub const fn new(auth: AuthEnvironment, finance: FinanceEnvironment) -> Self {
        Self { auth, finance }
    }
}

/// Root reducer delegating to the slices.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppReducer {
    auth: AuthReducer,
    finance: FinanceReducer,
}

impl AppReducer {
    /// Create the root reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            auth: AuthReducer::new(),
            finance: FinanceReducer::new(),
        }
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            AppAction::Auth(action) => {
                let login_succeeded = matches!(action, AuthAction::GetUserOk { .. });

                let mut effects: Effects<AppAction> = self
                    .auth
                    .reduce(&mut state.auth, action, &env.auth)
                    .into_iter()
                    .map(|effect| effect.map(AppAction::Auth))
                    .collect();

                if login_succeeded {
                    effects.push(Effect::dispatch(AppAction::Finance(
                        FinanceAction::GetWallets,
                    )));
                }

                effects
            }
            AppAction::Finance(action) => self
                .finance
                .reduce(&mut state.finance, action, &env.finance)
                .into_iter()
                .map(|effect| effect.map(AppAction::Finance))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthStatus;
    use crate::finance::FinanceStatus;
    use finboard_core::ApiError;
    use finboard_testing::mocks::{MockAuthApi, MockWalletApi, RecordingNavigator};
    use finboard_testing::{ReducerTest, assertions, fixtures};
    use std::sync::Arc;

    fn test_env() -> AppEnvironment {
        let auth_api = Arc::new(MockAuthApi::new());
        let wallet_api = Arc::new(MockWalletApi::new());
        let navigator = Arc::new(RecordingNavigator::new());
        AppEnvironment::new(
            AuthEnvironment::new(Arc::clone(&auth_api) as _, Arc::clone(&navigator) as _),
            FinanceEnvironment::new(wallet_api, auth_api, navigator),
        )
    }

    #[test]
    fn auth_actions_reach_the_auth_slice() {
        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_action(AppAction::Auth(AuthAction::GetUser))
            .then_state(|state| {
                assert_eq!(state.auth.status, AuthStatus::Loading);
                assert_eq!(state.finance, FinanceState::default());
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
            })
            .run();
    }

    #[test]
    fn finance_actions_reach_the_finance_slice() {
        let error = ApiError::new(500, "boom");

        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_action(AppAction::Finance(FinanceAction::GetWalletsError { error }))
            .then_state(|state| {
                assert_eq!(state.finance.status, FinanceStatus::Error);
                assert_eq!(state.auth, AuthState::default());
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[tokio::test]
    async fn login_success_kicks_off_exactly_one_wallets_fetch() {
        let env = test_env();
        let mut state = AppState::default();
        let mut effects = AppReducer::new().reduce(
            &mut state,
            AppAction::Auth(AuthAction::GetUserOk {
                user: fixtures::user(vec![fixtures::wallet("W1")]),
            }),
            &env,
        );

        assert_eq!(state.auth.status, AuthStatus::LoggedIn);
        assert_eq!(effects.len(), 1);

        let Some(Effect::Future(future)) = effects.pop() else {
            unreachable!("login success must dispatch a follow-up");
        };
        assert!(matches!(
            future.await,
            Some(AppAction::Finance(FinanceAction::GetWallets))
        ));
    }

    #[test]
    fn login_failure_does_not_touch_finance() {
        let error = ApiError::new(500, "boom");

        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_action(AppAction::Auth(AuthAction::GetUserError { error }))
            .then_state(|state| {
                assert_eq!(state.auth.status, AuthStatus::Error);
                assert_eq!(state.finance, FinanceState::default());
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn replaying_a_sequence_is_deterministic() {
        let env = test_env();
        let reducer = AppReducer::new();
        let sequence = || {
            vec![
                AppAction::Auth(AuthAction::GetUserOk {
                    user: fixtures::user(vec![]),
                }),
                AppAction::Finance(FinanceAction::GetWalletsOk {
                    wallets: vec![fixtures::wallet("W1")],
                }),
                AppAction::Finance(FinanceAction::SetSelectedWallet {
                    wallet: Some(fixtures::wallet("W1")),
                }),
            ]
        };

        let mut first = AppState::default();
        for action in sequence() {
            let _ = reducer.reduce(&mut first, action, &env);
        }
        let mut second = AppState::default();
        for action in sequence() {
            let _ = reducer.reduce(&mut second, action, &env);
        }

        assert_eq!(first, second);
    }
}
