//! # Finboard Testing
//!
//! Testing utilities and helpers for the Finboard state core.
//!
//! This crate provides:
//! - Mock implementations of the API and navigation collaborators
//! - Entity fixtures for common test scenarios
//! - A fluent Given-When-Then harness for reducers
//!
//! ## Example
//!
//! ```ignore
//! use finboard_testing::{ReducerTest, fixtures, mocks::MockWalletApi};
//!
//! ReducerTest::new(FinanceReducer)
//!     .with_env(test_environment())
//!     .given_state(FinanceState::default())
//!     .when_action(FinanceAction::GetWallets)
//!     .then_state(|state| {
//!         assert_eq!(state.status, FinanceStatus::Loading);
//!     })
//!     .run();
//! ```


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of the collaborator traits.
///
/// Each mock is scripted per method with a queue of responses; a call pops
/// the front of the queue. Calls are recorded so tests can assert on exactly
/// which requests the effects issued. An unscripted call yields a transport
/// error, surfacing missing setup as an `...Error` action instead of a hang.
pub mod mocks {
    use chrono::{DateTime, Utc};
    use finboard_core::api::ApiFuture;
    use finboard_core::entities::{
        Category, DateRange, Transaction, TransactionId, User, Wallet, WalletId, WalletMetrics,
    };
    use finboard_core::{ApiError, AuthApi, Navigator, Route, WalletApi};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex, PoisonError};
    use std::time::Duration;

    /// A scripted response: an optional delay before resolving, then a result.
    struct Scripted<T> {
        delay: Option<Duration>,
        result: Result<T, ApiError>,
    }

    type Script<T> = Mutex<VecDeque<Scripted<T>>>;

    fn push<T>(script: &Script<T>, delay: Option<Duration>, result: Result<T, ApiError>) {
        script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Scripted { delay, result });
    }

    fn pop<T>(script: &Script<T>, method: &str) -> Scripted<T> {
        script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Scripted {
                delay: None,
                result: Err(ApiError::transport(format!(
                    "no scripted response for {method}"
                ))),
            })
    }

    async fn resolve<T>(scripted: Scripted<T>) -> Result<T, ApiError> {
        if let Some(delay) = scripted.delay {
            tokio::time::sleep(delay).await;
        }
        scripted.result
    }

    /// One recorded call against [`MockAuthApi`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum AuthCall {
        /// `fetch_session_user` was invoked
        FetchSessionUser,
        /// `set_file_passwords` was invoked with these passwords
        SetFilePasswords(Vec<String>),
    }

    /// Scriptable mock of [`AuthApi`].
    #[derive(Default)]
    pub struct MockAuthApi {
        user: Script<User>,
        file_passwords: Script<()>,
        calls: Mutex<Vec<AuthCall>>,
    }

    impl MockAuthApi {
        /// Create a mock with no scripted responses.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Script the next `fetch_session_user` call to succeed.
        #[must_use]
        pub fn with_user(self, user: User) -> Self {
            push(&self.user, None, Ok(user));
            self
        }

        /// Script the next `fetch_session_user` call to succeed after `delay`.
        #[must_use]
        pub fn with_user_after(self, delay: Duration, user: User) -> Self {
            push(&self.user, Some(delay), Ok(user));
            self
        }

        /// Script the next `fetch_session_user` call to fail.
        #[must_use]
        pub fn with_user_error(self, error: ApiError) -> Self {
            push(&self.user, None, Err(error));
            self
        }

        /// Script the next `set_file_passwords` call.
        #[must_use]
        pub fn with_file_passwords_result(self, result: Result<(), ApiError>) -> Self {
            push(&self.file_passwords, None, result);
            self
        }

        /// The calls recorded so far, in order.
        #[must_use]
        pub fn calls(&self) -> Vec<AuthCall> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        fn record(&self, call: AuthCall) {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(call);
        }
    }

    impl AuthApi for MockAuthApi {
        fn fetch_session_user(&self) -> ApiFuture<'_, User> {
            self.record(AuthCall::FetchSessionUser);
            let scripted = pop(&self.user, "fetch_session_user");
            Box::pin(resolve(scripted))
        }

        fn set_file_passwords(&self, passwords: Vec<String>) -> ApiFuture<'_, ()> {
            self.record(AuthCall::SetFilePasswords(passwords));
            let scripted = pop(&self.file_passwords, "set_file_passwords");
            Box::pin(resolve(scripted))
        }
    }

    /// One recorded call against [`MockWalletApi`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum WalletCall {
        /// `list_wallets` was invoked
        ListWallets,
        /// `list_transactions` was invoked for this wallet
        ListTransactions(WalletId),
        /// `get_transaction` was invoked
        GetTransaction(WalletId, TransactionId),
        /// `sync_transactions_from_email` was invoked for this wallet
        SyncTransactionsFromEmail(WalletId),
        /// `compute_metrics` was invoked
        ComputeMetrics(WalletId, DateRange),
        /// `list_categories` was invoked for this wallet
        ListCategories(WalletId),
        /// `create_category` was invoked
        CreateCategory(WalletId, Category),
        /// `update_transaction` was invoked
        UpdateTransaction(WalletId, TransactionId, Transaction),
    }

    /// Scriptable mock of [`WalletApi`].
    #[derive(Default)]
    pub struct MockWalletApi {
        wallets: Script<Vec<Wallet>>,
        transactions: Script<Vec<Transaction>>,
        transaction: Script<Transaction>,
        sync: Script<String>,
        metrics: Script<WalletMetrics>,
        categories: Script<Vec<Category>>,
        create_category: Script<String>,
        update_transaction: Script<()>,
        calls: Mutex<Vec<WalletCall>>,
    }

    impl MockWalletApi {
        /// Create a mock with no scripted responses.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Script the next `list_wallets` call to succeed.
        #[must_use]
        pub fn with_wallets(self, wallets: Vec<Wallet>) -> Self {
            push(&self.wallets, None, Ok(wallets));
            self
        }

        /// Script the next `list_wallets` call to succeed after `delay`.
        #[must_use]
        pub fn with_wallets_after(self, delay: Duration, wallets: Vec<Wallet>) -> Self {
            push(&self.wallets, Some(delay), Ok(wallets));
            self
        }

        /// Script the next `list_wallets` call to fail.
        #[must_use]
        pub fn with_wallets_error(self, error: ApiError) -> Self {
            push(&self.wallets, None, Err(error));
            self
        }

        /// Script the next `list_transactions` call to succeed.
        #[must_use]
        pub fn with_transactions(self, transactions: Vec<Transaction>) -> Self {
            push(&self.transactions, None, Ok(transactions));
            self
        }

        /// Script the next `list_transactions` call to fail.
        #[must_use]
        pub fn with_transactions_error(self, error: ApiError) -> Self {
            push(&self.transactions, None, Err(error));
            self
        }

        /// Script the next `get_transaction` call to succeed.
        #[must_use]
        pub fn with_transaction(self, transaction: Transaction) -> Self {
            push(&self.transaction, None, Ok(transaction));
            self
        }

        /// Script the next `sync_transactions_from_email` call.
        #[must_use]
        pub fn with_sync_result(self, result: Result<String, ApiError>) -> Self {
            push(&self.sync, None, result);
            self
        }

        /// Script the next `compute_metrics` call to succeed.
        #[must_use]
        pub fn with_metrics(self, metrics: WalletMetrics) -> Self {
            push(&self.metrics, None, Ok(metrics));
            self
        }

        /// Script the next `list_categories` call to succeed.
        #[must_use]
        pub fn with_categories(self, categories: Vec<Category>) -> Self {
            push(&self.categories, None, Ok(categories));
            self
        }

        /// Script the next `create_category` call.
        #[must_use]
        pub fn with_create_category_result(self, result: Result<String, ApiError>) -> Self {
            push(&self.create_category, None, result);
            self
        }

        /// Script the next `update_transaction` call.
        #[must_use]
        pub fn with_update_result(self, result: Result<(), ApiError>) -> Self {
            push(&self.update_transaction, None, result);
            self
        }

        /// The calls recorded so far, in order.
        #[must_use]
        pub fn calls(&self) -> Vec<WalletCall> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        fn record(&self, call: WalletCall) {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(call);
        }
    }

    impl WalletApi for MockWalletApi {
        fn list_wallets(&self) -> ApiFuture<'_, Vec<Wallet>> {
            self.record(WalletCall::ListWallets);
            let scripted = pop(&self.wallets, "list_wallets");
            Box::pin(resolve(scripted))
        }

        fn list_transactions(&self, wallet_id: WalletId) -> ApiFuture<'_, Vec<Transaction>> {
            self.record(WalletCall::ListTransactions(wallet_id));
            let scripted = pop(&self.transactions, "list_transactions");
            Box::pin(resolve(scripted))
        }

        fn get_transaction(
            &self,
            wallet_id: WalletId,
            transaction_id: TransactionId,
        ) -> ApiFuture<'_, Transaction> {
            self.record(WalletCall::GetTransaction(wallet_id, transaction_id));
            let scripted = pop(&self.transaction, "get_transaction");
            Box::pin(resolve(scripted))
        }

        fn sync_transactions_from_email(&self, wallet_id: WalletId) -> ApiFuture<'_, String> {
            self.record(WalletCall::SyncTransactionsFromEmail(wallet_id));
            let scripted = pop(&self.sync, "sync_transactions_from_email");
            Box::pin(resolve(scripted))
        }

        fn compute_metrics(
            &self,
            wallet_id: WalletId,
            range: DateRange,
        ) -> ApiFuture<'_, WalletMetrics> {
            self.record(WalletCall::ComputeMetrics(wallet_id, range));
            let scripted = pop(&self.metrics, "compute_metrics");
            Box::pin(resolve(scripted))
        }

        fn list_categories(&self, wallet_id: WalletId) -> ApiFuture<'_, Vec<Category>> {
            self.record(WalletCall::ListCategories(wallet_id));
            let scripted = pop(&self.categories, "list_categories");
            Box::pin(resolve(scripted))
        }

        fn create_category(
            &self,
            wallet_id: WalletId,
            category: Category,
        ) -> ApiFuture<'_, String> {
            self.record(WalletCall::CreateCategory(wallet_id, category));
            let scripted = pop(&self.create_category, "create_category");
            Box::pin(resolve(scripted))
        }

        fn update_transaction(
            &self,
            wallet_id: WalletId,
            transaction_id: TransactionId,
            transaction: Transaction,
        ) -> ApiFuture<'_, ()> {
            self.record(WalletCall::UpdateTransaction(
                wallet_id,
                transaction_id,
                transaction,
            ));
            let scripted = pop(&self.update_transaction, "update_transaction");
            Box::pin(resolve(scripted))
        }
    }

    /// Navigator that records requested routes instead of routing.
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        routes: Mutex<Vec<Route>>,
    }

    impl RecordingNavigator {
        /// Create a navigator with an empty route log.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// The routes requested so far, in order.
        #[must_use]
        pub fn routes(&self) -> Vec<Route> {
            self.routes
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.routes
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(route);
        }
    }

    /// Convenience: wrap a mock in the `Arc` the environments expect.
    #[must_use]
    pub fn shared<T>(mock: T) -> Arc<T> {
        Arc::new(mock)
    }

    /// Fixed timestamp used by the entity fixtures (2025-01-01 00:00:00 UTC).
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which should never
    /// happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn fixed_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc)
    }
}

/// Entity fixtures for common test scenarios.
///
/// All timestamps are [`mocks::fixed_time`] so fixtures compare equal across
/// runs.
pub mod fixtures {
    use super::mocks::fixed_time;
    use finboard_core::entities::{
        Category, Transaction, TransactionId, User, Wallet, WalletId, WalletMetrics,
    };

    /// A wallet with the given ID and a derived display name.
    #[must_use]
    pub fn wallet(id: &str) -> Wallet {
        Wallet {
            id: WalletId::new(id),
            name: format!("Wallet {id}"),
            role: "owner".to_string(),
            joined_at: fixed_time(),
            sync_from_emails: Vec::new(),
        }
    }

    /// A user with the given wallets.
    #[must_use]
    pub fn user(wallets: Vec<Wallet>) -> User {
        User {
            id: "U1".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            picture_url: "https://example.com/avatar.png".to_string(),
            wallets,
        }
    }

    /// A transaction in `wallet_id` with the given (possibly signed) amount.
    #[must_use]
    pub fn transaction(id: &str, wallet_id: &str, amount: f64) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            wallet_id: WalletId::new(wallet_id),
            user_id: "U1".to_string(),
            category_id: String::new(),
            origin: "test-origin".to_string(),
            kind: "expense".to_string(),
            amount,
            system_description: format!("Transaction {id}"),
            user_description: String::new(),
            date: fixed_time(),
            processed_at: String::new(),
            created_at: String::new(),
        }
    }

    /// A category with the given name.
    #[must_use]
    pub fn category(name: &str) -> Category {
        Category {
            id: String::new(),
            name: name.to_string(),
            color: "#336699".to_string(),
            icon: "tag".to_string(),
        }
    }

    /// Empty metrics for the given wallet over the fixed timestamp instant.
    #[must_use]
    pub fn metrics(wallet_id: &str) -> WalletMetrics {
        WalletMetrics {
            wallet_id: WalletId::new(wallet_id),
            from: fixed_time(),
            to: fixed_time(),
            total_income: 0.0,
            total_expense: 0.0,
            expenses_by_category: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;
    use super::mocks::{AuthCall, MockAuthApi, MockWalletApi, RecordingNavigator, WalletCall};
    use finboard_core::entities::WalletId;
    use finboard_core::{AuthApi, Navigator, Route, WalletApi};

    #[tokio::test]
    async fn mock_auth_api_plays_scripted_responses_in_order() {
        let api = MockAuthApi::new()
            .with_user(fixtures::user(vec![]))
            .with_user_error(finboard_core::ApiError::new(401, "no session"));

        let first = api.fetch_session_user().await;
        let second = api.fetch_session_user().await;

        assert!(first.is_ok());
        assert!(matches!(second, Err(e) if e.is_unauthorized()));
        assert_eq!(
            api.calls(),
            vec![AuthCall::FetchSessionUser, AuthCall::FetchSessionUser]
        );
    }

    #[tokio::test]
    async fn mock_wallet_api_fails_unscripted_calls() {
        let api = MockWalletApi::new();

        let result = api.list_wallets().await;

        assert!(matches!(result, Err(e) if e.status == 0));
        assert_eq!(api.calls(), vec![WalletCall::ListWallets]);
    }

    #[tokio::test]
    async fn mock_wallet_api_records_call_payloads() {
        let api = MockWalletApi::new().with_transactions(vec![]);

        let _ = api.list_transactions(WalletId::new("W1")).await;

        assert_eq!(
            api.calls(),
            vec![WalletCall::ListTransactions(WalletId::new("W1"))]
        );
    }

    #[test]
    fn recording_navigator_keeps_order() {
        let navigator = RecordingNavigator::new();
        navigator.navigate(Route::Dashboard);
        navigator.navigate(Route::Root);

        assert_eq!(navigator.routes(), vec![Route::Dashboard, Route::Root]);
    }
}
