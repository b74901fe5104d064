//! Finance slice: wallets, transactions, categories, metrics.
//!
//! The most coupled part of the core. Beyond plain fetch triplets it owns
//! the effect chains: wallets-loaded selects the first wallet and fetches
//! its transactions, email-sync re-fetches the synced wallet, a transaction
//! update re-fetches that single transaction, and category/password writes
//! route back to the dashboard.
//!
//! All sub-resources share one `status` field: it reflects only the most
//! recently dispatched intent, not a per-resource map. Callers must not use
//! `status` to disambiguate which sub-resource is loading.

mod actions;
mod environment;
mod reducer;
mod state;

pub use actions::FinanceAction;
pub use environment::FinanceEnvironment;
pub use reducer::{
    FinanceReducer, GET_CATEGORIES_KEY, GET_METRICS_KEY, GET_TRANSACTION_KEY,
    GET_TRANSACTIONS_KEY, GET_WALLETS_KEY,
};
pub use state::{FinanceState, FinanceStatus};
