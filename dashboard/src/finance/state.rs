//! Finance slice state and selectors.

use finboard_core::ApiError;
use finboard_core::entities::{Category, Transaction, Wallet, WalletMetrics};

/// Finance operation status, shared by all sub-resources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FinanceStatus {
    /// Nothing fetched yet
    #[default]
    Empty,
    /// The most recently dispatched operation is in flight
    Loading,
    /// The most recently dispatched operation succeeded
    Ok,
    /// The most recently dispatched operation failed
    Error,
}

/// Finance slice state.
///
/// `transactions`, `transaction`, `categories` and `metrics` are scoped to
/// `selected_wallet` and become stale when the selection changes; the
/// reducer performs no automatic invalidation, the effect ordering
/// (selection triggers the transactions re-fetch) keeps them consistent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinanceState {
    /// Status of the most recently dispatched operation
    pub status: FinanceStatus,
    /// The user's wallets, in server order
    pub wallets: Vec<Wallet>,
    /// The wallet the views operate on, if any
    pub selected_wallet: Option<Wallet>,
    /// Transactions of the selected wallet, amounts normalized
    pub transactions: Vec<Transaction>,
    /// The transaction open in the detail view, if any
    pub transaction: Option<Transaction>,
    /// Categories of the selected wallet
    pub categories: Vec<Category>,
    /// Metrics of the selected wallet over the last requested period
    pub metrics: Option<WalletMetrics>,
    /// Last operation failure, if any
    pub error: Option<ApiError>,
}

impl FinanceState {
    /// The currently selected wallet.
    #[must_use]
    pub const fn selected_wallet(&self) -> Option<&Wallet> {
        self.selected_wallet.as_ref()
    }

    /// Transactions of the selected wallet.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The transaction open in the detail view.
    #[must_use]
    pub const fn transaction(&self) -> Option<&Transaction> {
        self.transaction.as_ref()
    }

    /// Categories of the selected wallet.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Metrics over the last requested period.
    #[must_use]
    pub const fn metrics(&self) -> Option<&WalletMetrics> {
        self.metrics.as_ref()
    }

    /// Whether the most recently dispatched operation is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == FinanceStatus::Loading
    }
}
