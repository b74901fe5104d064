//! Finance slice reducer and effects.

use super::actions::FinanceAction;
use super::environment::FinanceEnvironment;
use super::state::{FinanceState, FinanceStatus};
use finboard_core::{CancelKey, Effect, Effects, Reducer, Route, smallvec};
use std::sync::Arc;

/// Cancellation key for the wallets fetch.
pub const GET_WALLETS_KEY: CancelKey = CancelKey::new("finance/get-wallets");
/// Cancellation key for the transactions-list fetch.
pub const GET_TRANSACTIONS_KEY: CancelKey = CancelKey::new("finance/get-transactions");
/// Cancellation key for the metrics fetch.
pub const GET_METRICS_KEY: CancelKey = CancelKey::new("finance/get-metrics");
/// Cancellation key for the single-transaction fetch.
pub const GET_TRANSACTION_KEY: CancelKey = CancelKey::new("finance/get-transaction");
/// Cancellation key for the categories fetch.
pub const GET_CATEGORIES_KEY: CancelKey = CancelKey::new("finance/get-categories");

/// Reducer for the finance slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinanceReducer;

impl FinanceReducer {
    /// Create the finance reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for FinanceReducer {
    type State = FinanceState;
    type Action = FinanceAction;
    type Environment = FinanceEnvironment;

    #[allow(clippy::too_many_lines)] // one arm per cataloged action
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            FinanceAction::GetWallets => {
                state.status = FinanceStatus::Loading;

                let api = Arc::clone(&env.api);
                smallvec![Effect::Cancellable {
                    key: GET_WALLETS_KEY,
                    future: Box::pin(async move {
                        Some(match api.list_wallets().await {
                            Ok(wallets) => FinanceAction::GetWalletsOk { wallets },
                            Err(error) => FinanceAction::GetWalletsError { error },
                        })
                    }),
                }]
            }
            FinanceAction::GetWalletsOk { wallets } => {
                state.status = FinanceStatus::Ok;
                state.wallets = wallets;

                // Deterministic index-0 selection; an empty list selects
                // nothing and fetches nothing.
                smallvec![Effect::dispatch(FinanceAction::SetSelectedWallet {
                    wallet: state.wallets.first().cloned(),
                })]
            }
            FinanceAction::GetWalletsError { error } => {
                state.status = FinanceStatus::Error;
                state.error = Some(error);
                smallvec![Effect::None]
            }

            FinanceAction::SetSelectedWallet { wallet } => {
                state.selected_wallet = wallet;

                match &state.selected_wallet {
                    Some(wallet) => {
                        smallvec![Effect::dispatch(FinanceAction::GetTransactions {
                            wallet_id: wallet.id.clone(),
                        })]
                    }
                    None => smallvec![Effect::None],
                }
            }

            FinanceAction::GetTransactions { wallet_id } => {
                state.status = FinanceStatus::Loading;

                let api = Arc::clone(&env.api);
                smallvec![Effect::Cancellable {
                    key: GET_TRANSACTIONS_KEY,
                    future: Box::pin(async move {
                        Some(match api.list_transactions(wallet_id).await {
                            Ok(mut transactions) => {
                                // Amounts arrive signed; the views work on
                                // magnitudes. Data-shaping contract, not a
                                // passthrough.
                                for transaction in &mut transactions {
                                    transaction.amount = transaction.amount.abs();
                                }
                                FinanceAction::GetTransactionsOk { transactions }
                            }
                            Err(error) => FinanceAction::GetTransactionsError { error },
                        })
                    }),
                }]
            }
            FinanceAction::GetTransactionsOk { transactions } => {
                state.status = FinanceStatus::Ok;
                state.transactions = transactions;
                smallvec![Effect::None]
            }
            FinanceAction::GetTransactionsError { error } => {
                state.status = FinanceStatus::Error;
                state.error = Some(error);
                smallvec![Effect::None]
            }

            FinanceAction::SyncTransactionsFromEmail { wallet_id } => {
                state.status = FinanceStatus::Loading;

                // Merge semantics: syncs for different wallets may overlap,
                // and each completion independently re-fetches its wallet.
                let api = Arc::clone(&env.api);
                smallvec![Effect::Future(Box::pin(async move {
                    Some(
                        match api.sync_transactions_from_email(wallet_id.clone()).await {
                            Ok(_) => FinanceAction::SyncTransactionsFromEmailOk { wallet_id },
                            Err(error) => FinanceAction::SyncTransactionsFromEmailError { error },
                        },
                    )
                }))]
            }
            FinanceAction::SyncTransactionsFromEmailOk { wallet_id } => {
                state.status = FinanceStatus::Ok;
                smallvec![Effect::dispatch(FinanceAction::GetTransactions {
                    wallet_id,
                })]
            }
            FinanceAction::SyncTransactionsFromEmailError { error } => {
                state.status = FinanceStatus::Error;
                state.error = Some(error);
                smallvec![Effect::None]
            }

            FinanceAction::GetMetrics { wallet_id, range } => {
                state.status = FinanceStatus::Loading;

                let api = Arc::clone(&env.api);
                smallvec![Effect::Cancellable {
                    key: GET_METRICS_KEY,
                    future: Box::pin(async move {
                        Some(match api.compute_metrics(wallet_id, range).await {
                            Ok(metrics) => FinanceAction::GetMetricsOk { metrics },
                            Err(error) => FinanceAction::GetMetricsError { error },
                        })
                    }),
                }]
            }
            FinanceAction::GetMetricsOk { metrics } => {
                state.status = FinanceStatus::Ok;
                state.metrics = Some(metrics);
                smallvec![Effect::None]
            }
            FinanceAction::GetMetricsError { error } => {
                state.status = FinanceStatus::Error;
                state.error = Some(error);
                smallvec![Effect::None]
            }

            FinanceAction::GetTransaction {
                wallet_id,
                transaction_id,
            } => {
                state.status = FinanceStatus::Loading;

                let api = Arc::clone(&env.api);
                smallvec![Effect::Cancellable {
                    key: GET_TRANSACTION_KEY,
                    future: Box::pin(async move {
                        Some(match api.get_transaction(wallet_id, transaction_id).await {
                            Ok(transaction) => FinanceAction::GetTransactionOk { transaction },
                            Err(error) => FinanceAction::GetTransactionError { error },
                        })
                    }),
                }]
            }
            FinanceAction::GetTransactionOk { transaction } => {
                state.status = FinanceStatus::Ok;
                state.transaction = Some(transaction);
                smallvec![Effect::None]
            }
            FinanceAction::GetTransactionError { error } => {
                state.status = FinanceStatus::Error;
                state.error = Some(error);
                smallvec![Effect::None]
            }

            FinanceAction::SetSelectedTransaction { transaction } => {
                state.transaction = transaction;
                smallvec![Effect::None]
            }

            FinanceAction::GetCategories { wallet_id } => {
                state.status = FinanceStatus::Loading;

                let api = Arc::clone(&env.api);
                smallvec![Effect::Cancellable {
                    key: GET_CATEGORIES_KEY,
                    future: Box::pin(async move {
                        Some(match api.list_categories(wallet_id).await {
                            Ok(categories) => FinanceAction::GetCategoriesOk { categories },
                            Err(error) => FinanceAction::GetCategoriesError { error },
                        })
                    }),
                }]
            }
            FinanceAction::GetCategoriesOk { categories } => {
                state.status = FinanceStatus::Ok;
                state.categories = categories;
                smallvec![Effect::None]
            }
            FinanceAction::GetCategoriesError { error } => {
                state.status = FinanceStatus::Error;
                state.error = Some(error);
                smallvec![Effect::None]
            }

            FinanceAction::CreateCategory {
                wallet_id,
                category,
            } => {
                state.status = FinanceStatus::Loading;

                let api = Arc::clone(&env.api);
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.create_category(wallet_id, category).await {
                        Ok(_) => FinanceAction::CreateCategoryOk,
                        Err(error) => FinanceAction::CreateCategoryError { error },
                    })
                }))]
            }
            FinanceAction::CreateCategoryOk => {
                // The category list is not appended locally; views re-fetch.
                state.status = FinanceStatus::Ok;

                let navigator = Arc::clone(&env.navigator);
                smallvec![Effect::Future(Box::pin(async move {
                    navigator.navigate(Route::Dashboard);
                    None
                }))]
            }
            FinanceAction::CreateCategoryError { error } => {
                state.status = FinanceStatus::Error;
                state.error = Some(error);
                smallvec![Effect::None]
            }

            FinanceAction::UpdateTransaction {
                wallet_id,
                transaction_id,
                transaction,
            } => {
                state.status = FinanceStatus::Loading;

                let api = Arc::clone(&env.api);
                smallvec![Effect::Future(Box::pin(async move {
                    Some(
                        match api
                            .update_transaction(
                                wallet_id.clone(),
                                transaction_id.clone(),
                                transaction,
                            )
                            .await
                        {
                            Ok(()) => FinanceAction::UpdateTransactionOk {
                                wallet_id,
                                transaction_id,
                            },
                            Err(error) => FinanceAction::UpdateTransactionError { error },
                        },
                    )
                }))]
            }
            FinanceAction::UpdateTransactionOk {
                wallet_id,
                transaction_id,
            } => {
                // Re-fetch rather than trusting the client payload: the
                // server derives fields (e.g. the category name).
                state.status = FinanceStatus::Ok;
                smallvec![Effect::dispatch(FinanceAction::GetTransaction {
                    wallet_id,
                    transaction_id,
                })]
            }
            FinanceAction::UpdateTransactionError { error } => {
                state.status = FinanceStatus::Error;
                state.error = Some(error);
                smallvec![Effect::None]
            }

            FinanceAction::SetFilePasswords { passwords } => {
                state.status = FinanceStatus::Loading;

                let api = Arc::clone(&env.auth_api);
                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.set_file_passwords(passwords).await {
                        Ok(()) => FinanceAction::SetFilePasswordsOk,
                        Err(error) => FinanceAction::SetFilePasswordsError { error },
                    })
                }))]
            }
            FinanceAction::SetFilePasswordsOk => {
                state.status = FinanceStatus::Ok;

                let navigator = Arc::clone(&env.navigator);
                smallvec![Effect::Future(Box::pin(async move {
                    navigator.navigate(Route::Dashboard);
                    None
                }))]
            }
            FinanceAction::SetFilePasswordsError { error } => {
                state.status = FinanceStatus::Error;
                state.error = Some(error);
                smallvec![Effect::None]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finboard_core::{ApiError, Navigator};
    use finboard_core::entities::WalletId;
    use finboard_testing::mocks::{MockAuthApi, MockWalletApi, RecordingNavigator};
    use finboard_testing::{ReducerTest, assertions, fixtures};

    fn test_env() -> FinanceEnvironment {
        FinanceEnvironment::new(
            Arc::new(MockWalletApi::new()),
            Arc::new(MockAuthApi::new()),
            Arc::new(RecordingNavigator::new()),
        )
    }

    fn env_with_api(api: MockWalletApi) -> FinanceEnvironment {
        FinanceEnvironment::new(
            Arc::new(api),
            Arc::new(MockAuthApi::new()),
            Arc::new(RecordingNavigator::new()),
        )
    }

    #[test]
    fn get_wallets_sets_loading_and_issues_cancellable_fetch() {
        ReducerTest::new(FinanceReducer::new())
            .with_env(test_env())
            .given_state(FinanceState::default())
            .when_action(FinanceAction::GetWallets)
            .then_state(|state| {
                assert!(state.is_loading());
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_cancellable_effect(effects, GET_WALLETS_KEY);
            })
            .run();
    }

    #[test]
    fn get_wallets_ok_selects_first_wallet() {
        let wallets = vec![fixtures::wallet("W1"), fixtures::wallet("W2")];

        ReducerTest::new(FinanceReducer::new())
            .with_env(test_env())
            .given_state(FinanceState::default())
            .when_action(FinanceAction::GetWalletsOk {
                wallets: wallets.clone(),
            })
            .then_state(move |state| {
                assert_eq!(state.status, FinanceStatus::Ok);
                assert_eq!(state.wallets, wallets);
            })
            .then_effects(|effects| {
                // The index-0 selection dispatch
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[tokio::test]
    async fn get_wallets_ok_selection_carries_first_wallet() {
        let env = test_env();
        let mut state = FinanceState::default();
        let mut effects = FinanceReducer::new().reduce(
            &mut state,
            FinanceAction::GetWalletsOk {
                wallets: vec![fixtures::wallet("W1"), fixtures::wallet("W2")],
            },
            &env,
        );

        let Some(Effect::Future(future)) = effects.pop() else {
            unreachable!("wallets-loaded must dispatch a selection");
        };
        let Some(FinanceAction::SetSelectedWallet { wallet }) = future.await else {
            unreachable!("follow-up must be SetSelectedWallet");
        };
        assert_eq!(wallet.map(|w| w.id), Some(WalletId::new("W1")));
    }

    #[tokio::test]
    async fn empty_wallet_list_selects_nothing_and_fetches_nothing() {
        let env = test_env();
        let mut state = FinanceState::default();
        let reducer = FinanceReducer::new();

        let mut effects =
            reducer.reduce(&mut state, FinanceAction::GetWalletsOk { wallets: vec![] }, &env);
        let Some(Effect::Future(future)) = effects.pop() else {
            unreachable!("wallets-loaded must dispatch a selection");
        };
        let Some(selection) = future.await else {
            unreachable!("selection dispatch must produce an action");
        };

        let follow_ups = reducer.reduce(&mut state, selection, &env);
        assert!(state.selected_wallet.is_none());
        assertions::assert_no_effects(&follow_ups);
    }

    #[test]
    fn selecting_a_wallet_triggers_its_transactions_fetch() {
        let wallet = fixtures::wallet("W2");

        ReducerTest::new(FinanceReducer::new())
            .with_env(test_env())
            .given_state(FinanceState::default())
            .when_action(FinanceAction::SetSelectedWallet {
                wallet: Some(wallet.clone()),
            })
            .then_state(move |state| {
                assert_eq!(state.selected_wallet.as_ref(), Some(&wallet));
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[tokio::test]
    async fn transactions_fetch_normalizes_amounts() {
        let api = MockWalletApi::new().with_transactions(vec![
            fixtures::transaction("T1", "W1", -42.5),
            fixtures::transaction("T2", "W1", 10.0),
        ]);
        let env = env_with_api(api);

        let mut state = FinanceState::default();
        let mut effects = FinanceReducer::new().reduce(
            &mut state,
            FinanceAction::GetTransactions {
                wallet_id: WalletId::new("W1"),
            },
            &env,
        );

        let Some(Effect::Cancellable { key, future }) = effects.pop() else {
            unreachable!("transactions fetch must be cancellable");
        };
        assert_eq!(key, GET_TRANSACTIONS_KEY);

        let Some(FinanceAction::GetTransactionsOk { transactions }) = future.await else {
            unreachable!("scripted fetch must succeed");
        };
        let amounts: Vec<f64> = transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![42.5, 10.0]);
    }

    #[test]
    fn sync_ok_refetches_the_same_wallet() {
        ReducerTest::new(FinanceReducer::new())
            .with_env(test_env())
            .given_state(FinanceState {
                wallets: vec![fixtures::wallet("W1"), fixtures::wallet("W2")],
                ..FinanceState::default()
            })
            .when_action(FinanceAction::SyncTransactionsFromEmailOk {
                wallet_id: WalletId::new("W1"),
            })
            .then_state(|state| {
                assert_eq!(state.status, FinanceStatus::Ok);
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[tokio::test]
    async fn sync_ok_refetch_targets_the_synced_wallet() {
        let env = test_env();
        let mut state = FinanceState::default();
        let mut effects = FinanceReducer::new().reduce(
            &mut state,
            FinanceAction::SyncTransactionsFromEmailOk {
                wallet_id: WalletId::new("W1"),
            },
            &env,
        );

        let Some(Effect::Future(future)) = effects.pop() else {
            unreachable!("sync ok must dispatch a re-fetch");
        };
        let Some(FinanceAction::GetTransactions { wallet_id }) = future.await else {
            unreachable!("follow-up must be GetTransactions");
        };
        assert_eq!(wallet_id, WalletId::new("W1"));
    }

    #[tokio::test]
    async fn update_ok_refetches_the_single_transaction() {
        let env = test_env();
        let mut state = FinanceState::default();
        let mut effects = FinanceReducer::new().reduce(
            &mut state,
            FinanceAction::UpdateTransactionOk {
                wallet_id: WalletId::new("W1"),
                transaction_id: finboard_core::entities::TransactionId::new("T1"),
            },
            &env,
        );

        let Some(Effect::Future(future)) = effects.pop() else {
            unreachable!("update ok must dispatch a re-fetch");
        };
        let follow_up = future.await;
        assert!(matches!(
            follow_up,
            Some(FinanceAction::GetTransaction { wallet_id, transaction_id })
                if wallet_id == WalletId::new("W1")
                    && transaction_id == finboard_core::entities::TransactionId::new("T1")
        ));
    }

    #[tokio::test]
    async fn create_category_ok_routes_to_dashboard_without_dispatching() {
        let navigator = Arc::new(RecordingNavigator::new());
        let env = FinanceEnvironment::new(
            Arc::new(MockWalletApi::new()),
            Arc::new(MockAuthApi::new()),
            Arc::clone(&navigator) as Arc<dyn Navigator>,
        );

        let mut state = FinanceState::default();
        let mut effects =
            FinanceReducer::new().reduce(&mut state, FinanceAction::CreateCategoryOk, &env);

        let Some(Effect::Future(future)) = effects.pop() else {
            unreachable!("create ok must produce a navigation future");
        };
        assert!(future.await.is_none());
        assert_eq!(navigator.routes(), vec![Route::Dashboard]);
        // The list is not appended locally.
        assert!(state.categories.is_empty());
    }

    #[tokio::test]
    async fn set_file_passwords_ok_routes_to_dashboard() {
        let navigator = Arc::new(RecordingNavigator::new());
        let env = FinanceEnvironment::new(
            Arc::new(MockWalletApi::new()),
            Arc::new(MockAuthApi::new()),
            Arc::clone(&navigator) as Arc<dyn Navigator>,
        );

        let mut state = FinanceState::default();
        let mut effects =
            FinanceReducer::new().reduce(&mut state, FinanceAction::SetFilePasswordsOk, &env);

        let Some(Effect::Future(future)) = effects.pop() else {
            unreachable!("passwords ok must produce a navigation future");
        };
        assert!(future.await.is_none());
        assert_eq!(navigator.routes(), vec![Route::Dashboard]);
    }

    #[tokio::test]
    async fn set_file_passwords_goes_through_the_auth_collaborator() {
        let auth_api = Arc::new(MockAuthApi::new().with_file_passwords_result(Ok(())));
        let env = FinanceEnvironment::new(
            Arc::new(MockWalletApi::new()),
            Arc::clone(&auth_api) as Arc<dyn finboard_core::AuthApi>,
            Arc::new(RecordingNavigator::new()),
        );

        let mut state = FinanceState::default();
        let mut effects = FinanceReducer::new().reduce(
            &mut state,
            FinanceAction::SetFilePasswords {
                passwords: vec!["secret".to_string()],
            },
            &env,
        );

        let Some(Effect::Future(future)) = effects.pop() else {
            unreachable!("passwords intent must produce a write effect");
        };
        assert!(matches!(
            future.await,
            Some(FinanceAction::SetFilePasswordsOk)
        ));
        assert_eq!(auth_api.calls().len(), 1);
    }

    #[test]
    fn clearing_the_selected_transaction_is_idempotent() {
        ReducerTest::new(FinanceReducer::new())
            .with_env(test_env())
            .given_state(FinanceState::default())
            .when_action(FinanceAction::SetSelectedTransaction { transaction: None })
            .then_state(|state| {
                assert!(state.transaction.is_none());
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn errors_are_stored_verbatim() {
        let error = ApiError::new(503, "unavailable");

        ReducerTest::new(FinanceReducer::new())
            .with_env(test_env())
            .given_state(FinanceState {
                status: FinanceStatus::Loading,
                ..FinanceState::default()
            })
            .when_action(FinanceAction::GetTransactionsError {
                error: error.clone(),
            })
            .then_state(move |state| {
                assert_eq!(state.status, FinanceStatus::Error);
                assert_eq!(state.error.as_ref(), Some(&error));
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn metrics_range_is_passed_through_untouched() {
        let range = finboard_core::entities::DateRange::new(
            finboard_testing::mocks::fixed_time(),
            finboard_testing::mocks::fixed_time(),
        );

        ReducerTest::new(FinanceReducer::new())
            .with_env(test_env())
            .given_state(FinanceState::default())
            .when_action(FinanceAction::GetMetrics {
                wallet_id: WalletId::new("W1"),
                range,
            })
            .then_state(|state| {
                assert!(state.is_loading());
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_cancellable_effect(effects, GET_METRICS_KEY);
            })
            .run();
    }
}
