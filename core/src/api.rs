//! Collaborator traits for the remote finance API.
//!
//! The core treats each capability as an opaque asynchronous operation that
//! either yields a value or an [`ApiError`] carrying a status code. No retry
//! or backoff happens at this layer; each failure surfaces exactly once as
//! the matching `...Error` action.
//!
//! # Dyn Compatibility
//!
//! These traits use explicit `Pin<Box<dyn Future>>` returns instead of
//! `async fn` to enable trait object usage (`Arc<dyn WalletApi>`). This is
//! required for the effect system, where reducers create effect futures that
//! capture the API handle.

use crate::entities::{
    Category, DateRange, Transaction, TransactionId, User, Wallet, WalletId, WalletMetrics,
};
use crate::error::ApiError;
use std::future::Future;
use std::pin::Pin;

/// Future returned by every collaborator call.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'a>>;

/// Session-facing capabilities.
pub trait AuthApi: Send + Sync {
    /// Fetch the currently authenticated user.
    ///
    /// A 401 means there is no valid session; callers map that onto the
    /// distinguished "not logged in" state rather than an error.
    fn fetch_session_user(&self) -> ApiFuture<'_, User>;

    /// Replace the user's file-decryption passwords.
    fn set_file_passwords(&self, passwords: Vec<String>) -> ApiFuture<'_, ()>;
}

/// Wallet-facing capabilities.
pub trait WalletApi: Send + Sync {
    /// List the wallets the current user belongs to.
    fn list_wallets(&self) -> ApiFuture<'_, Vec<Wallet>>;

    /// List all transactions for a wallet.
    fn list_transactions(&self, wallet_id: WalletId) -> ApiFuture<'_, Vec<Transaction>>;

    /// Fetch a single transaction, including server-derived fields.
    fn get_transaction(
        &self,
        wallet_id: WalletId,
        transaction_id: TransactionId,
    ) -> ApiFuture<'_, Transaction>;

    /// Trigger a server-side sync of transactions from the wallet's
    /// configured email addresses. Returns the server's acknowledgement.
    fn sync_transactions_from_email(&self, wallet_id: WalletId) -> ApiFuture<'_, String>;

    /// Compute spending metrics for a wallet over a caller-supplied range.
    fn compute_metrics(
        &self,
        wallet_id: WalletId,
        range: DateRange,
    ) -> ApiFuture<'_, WalletMetrics>;

    /// List the categories defined in a wallet.
    fn list_categories(&self, wallet_id: WalletId) -> ApiFuture<'_, Vec<Category>>;

    /// Create a category in a wallet. Returns the server's acknowledgement;
    /// callers re-fetch the category list rather than appending locally.
    fn create_category(&self, wallet_id: WalletId, category: Category) -> ApiFuture<'_, String>;

    /// Update a transaction. The caller re-fetches the transaction afterwards
    /// to pick up server-derived fields instead of trusting its own payload.
    fn update_transaction(
        &self,
        wallet_id: WalletId,
        transaction_id: TransactionId,
        transaction: Transaction,
    ) -> ApiFuture<'_, ()>;
}
