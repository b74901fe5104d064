//! Finance slice actions.

use finboard_core::entities::{
    Category, DateRange, Transaction, TransactionId, Wallet, WalletId, WalletMetrics,
};
use finboard_core::{ActionName, ApiError};

/// Actions owned by the finance slice.
///
/// Every asynchronous operation follows the intent / ok / error triplet.
/// The two `Set...` actions are synchronous selection updates; the ok
/// variants of the chained operations carry the identifiers their follow-up
/// fetches need (the synced wallet, the updated transaction).
#[derive(Debug, Clone)]
pub enum FinanceAction {
    /// List the current user's wallets
    GetWallets,
    /// Wallets were listed successfully
    GetWalletsOk {
        /// The wallets, in server order
        wallets: Vec<Wallet>,
    },
    /// Wallet listing failed
    GetWalletsError {
        /// The failure
        error: ApiError,
    },

    /// Replace the selected wallet (`None` when there are no wallets)
    SetSelectedWallet {
        /// The wallet to select, if any
        wallet: Option<Wallet>,
    },

    /// List transactions for a wallet
    GetTransactions {
        /// The wallet to fetch transactions for
        wallet_id: WalletId,
    },
    /// Transactions were listed; amounts already normalized to absolute value
    GetTransactionsOk {
        /// The transactions, in server order
        transactions: Vec<Transaction>,
    },
    /// Transaction listing failed
    GetTransactionsError {
        /// The failure
        error: ApiError,
    },

    /// Trigger a server-side sync of transactions from email
    SyncTransactionsFromEmail {
        /// The wallet to sync
        wallet_id: WalletId,
    },
    /// The sync completed; reducing this re-fetches the same wallet
    SyncTransactionsFromEmailOk {
        /// The wallet that was synced
        wallet_id: WalletId,
    },
    /// The sync failed
    SyncTransactionsFromEmailError {
        /// The failure
        error: ApiError,
    },

    /// Compute spending metrics over a caller-supplied period
    GetMetrics {
        /// The wallet to compute metrics for
        wallet_id: WalletId,
        /// The half-open period, never defaulted or clamped by the core
        range: DateRange,
    },
    /// Metrics were computed
    GetMetricsOk {
        /// The computed metrics
        metrics: WalletMetrics,
    },
    /// Metrics computation failed
    GetMetricsError {
        /// The failure
        error: ApiError,
    },

    /// Fetch a single transaction
    GetTransaction {
        /// The owning wallet
        wallet_id: WalletId,
        /// The transaction to fetch
        transaction_id: TransactionId,
    },
    /// The transaction was fetched
    GetTransactionOk {
        /// The transaction, including server-derived fields
        transaction: Transaction,
    },
    /// The transaction fetch failed
    GetTransactionError {
        /// The failure
        error: ApiError,
    },

    /// Replace the selected transaction (`None` clears the detail view)
    SetSelectedTransaction {
        /// The transaction to select, if any
        transaction: Option<Transaction>,
    },

    /// List categories for a wallet
    GetCategories {
        /// The wallet to fetch categories for
        wallet_id: WalletId,
    },
    /// Categories were listed
    GetCategoriesOk {
        /// The categories, in server order
        categories: Vec<Category>,
    },
    /// Category listing failed
    GetCategoriesError {
        /// The failure
        error: ApiError,
    },

    /// Create a category in a wallet
    CreateCategory {
        /// The wallet to create the category in
        wallet_id: WalletId,
        /// The category to create
        category: Category,
    },
    /// The category was created; routes back to the dashboard
    CreateCategoryOk,
    /// Category creation failed
    CreateCategoryError {
        /// The failure
        error: ApiError,
    },

    /// Update a transaction
    UpdateTransaction {
        /// The owning wallet
        wallet_id: WalletId,
        /// The transaction to update
        transaction_id: TransactionId,
        /// The new transaction payload
        transaction: Transaction,
    },
    /// The update succeeded; reducing this re-fetches the transaction
    UpdateTransactionOk {
        /// The owning wallet
        wallet_id: WalletId,
        /// The updated transaction
        transaction_id: TransactionId,
    },
    /// The update failed
    UpdateTransactionError {
        /// The failure
        error: ApiError,
    },

    /// Replace the user's file-decryption passwords
    SetFilePasswords {
        /// The new passwords
        passwords: Vec<String>,
    },
    /// The passwords were set; routes back to the dashboard
    SetFilePasswordsOk,
    /// Setting the passwords failed
    SetFilePasswordsError {
        /// The failure
        error: ApiError,
    },
}

impl ActionName for FinanceAction {
    fn name(&self) -> &'static str {
        match self {
            FinanceAction::GetWallets => "[Finance] get wallets",
            FinanceAction::GetWalletsOk { .. } => "[Finance] get wallets ok",
            FinanceAction::GetWalletsError { .. } => "[Finance] get wallets error",
            FinanceAction::SetSelectedWallet { .. } => "[Finance] set selected wallet",
            FinanceAction::GetTransactions { .. } => "[Finance] get transactions",
            FinanceAction::GetTransactionsOk { .. } => "[Finance] get transactions ok",
            FinanceAction::GetTransactionsError { .. } => "[Finance] get transactions error",
            FinanceAction::SyncTransactionsFromEmail { .. } => {
                "[Finance] sync transactions from email"
            }
            FinanceAction::SyncTransactionsFromEmailOk { .. } => {
                "[Finance] sync transactions from email ok"
            }
            FinanceAction::SyncTransactionsFromEmailError { .. } => {
                "[Finance] sync transactions from email error"
            }
            FinanceAction::GetMetrics { .. } => "[Finance] get metrics",
            FinanceAction::GetMetricsOk { .. } => "[Finance] get metrics ok",
            FinanceAction::GetMetricsError { .. } => "[Finance] get metrics error",
            FinanceAction::GetTransaction { .. } => "[Finance] get transaction",
            FinanceAction::GetTransactionOk { .. } => "[Finance] get transaction ok",
            FinanceAction::GetTransactionError { .. } => "[Finance] get transaction error",
            FinanceAction::SetSelectedTransaction { .. } => "[Finance] set selected transaction",
            FinanceAction::GetCategories { .. } => "[Finance] get categories",
            FinanceAction::GetCategoriesOk { .. } => "[Finance] get categories ok",
            FinanceAction::GetCategoriesError { .. } => "[Finance] get categories error",
            FinanceAction::CreateCategory { .. } => "[Finance] create category",
            FinanceAction::CreateCategoryOk => "[Finance] create category ok",
            FinanceAction::CreateCategoryError { .. } => "[Finance] create category error",
            FinanceAction::UpdateTransaction { .. } => "[Finance] update transaction",
            FinanceAction::UpdateTransactionOk { .. } => "[Finance] update transaction ok",
            FinanceAction::UpdateTransactionError { .. } => "[Finance] update transaction error",
            FinanceAction::SetFilePasswords { .. } => "[Finance] set file passwords",
            FinanceAction::SetFilePasswordsOk => "[Finance] set file passwords ok",
            FinanceAction::SetFilePasswordsError { .. } => "[Finance] set file passwords error",
        }
    }
}
