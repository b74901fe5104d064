//! Read-only value types produced by the remote system.
//!
//! These mirror the wire format of the finance API (camelCase field names,
//! string IDs, RFC 3339 timestamps). The core neither validates nor mutates
//! their fields, with one exception: transaction amounts are normalized to
//! their absolute value by the transactions-fetch effect before they enter
//! state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletId(pub String);

impl WalletId {
    /// Create a wallet ID from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WalletId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl TransactionId {
    /// Create a transaction ID from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The authenticated user, including the wallets they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned user ID
    #[serde(rename = "ID")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Avatar URL
    #[serde(rename = "pictureUrl")]
    pub picture_url: String,
    /// Wallets this user is a member of
    #[serde(default)]
    pub wallets: Vec<Wallet>,
}

/// A sender address a wallet syncs transactions from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncFromEmail {
    /// The email address transactions are parsed from
    pub email: String,
}

/// A wallet shared by one or more users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Server-assigned wallet ID
    #[serde(rename = "ID")]
    pub id: WalletId,
    /// Wallet display name
    pub name: String,
    /// The current user's role in this wallet
    pub role: String,
    /// When the current user joined the wallet
    #[serde(rename = "joinedAt")]
    pub joined_at: DateTime<Utc>,
    /// Addresses transactions are synced from
    #[serde(rename = "syncFromEmails", default)]
    pub sync_from_emails: Vec<SyncFromEmail>,
}

/// A single financial transaction within a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-assigned transaction ID
    #[serde(rename = "ID")]
    pub id: TransactionId,
    /// Owning wallet
    #[serde(rename = "walletID")]
    pub wallet_id: WalletId,
    /// User the transaction belongs to
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Category assigned to the transaction, if any
    #[serde(rename = "categoryID", default)]
    pub category_id: String,
    /// Where the transaction was imported from (e.g. a bank email parser)
    pub origin: String,
    /// Transaction kind as reported by the origin (income, expense, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Amount. Sign-normalized to absolute value before entering state.
    pub amount: f64,
    /// Description parsed from the origin
    #[serde(rename = "systemDescription", default)]
    pub system_description: String,
    /// Description entered by the user
    #[serde(rename = "userDescription", default)]
    pub user_description: String,
    /// When the transaction happened
    pub date: DateTime<Utc>,
    /// When the origin processed it
    #[serde(rename = "processedAt", default)]
    pub processed_at: String,
    /// When the server first saw it
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// A spending category within a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned category ID
    #[serde(rename = "ID", default)]
    pub id: String,
    /// Category display name
    pub name: String,
    /// Display color (hex)
    pub color: String,
    /// Display icon name
    pub icon: String,
}

/// Total spent in one category over a metrics period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExpense {
    /// Category display name
    #[serde(rename = "categoryName")]
    pub category_name: String,
    /// Total spent in the period
    pub total: f64,
    /// Category display color
    pub color: String,
}

/// Aggregated spending metrics for a wallet over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletMetrics {
    /// Wallet the metrics were computed for
    #[serde(rename = "walletID")]
    pub wallet_id: WalletId,
    /// Start of the period (inclusive)
    pub from: DateTime<Utc>,
    /// End of the period (exclusive)
    pub to: DateTime<Utc>,
    /// Sum of income in the period
    #[serde(rename = "totalIncome")]
    pub total_income: f64,
    /// Sum of expenses in the period
    #[serde(rename = "totalExpense")]
    pub total_expense: f64,
    /// Per-category expense breakdown
    #[serde(rename = "expensesByCategory", default)]
    pub expenses_by_category: Vec<CategoryExpense>,
}

/// A half-open metrics period, supplied by the caller.
///
/// The core never defaults or clamps the range; producing a valid period
/// (e.g. first/last day of the current month) is the view layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start of the period (inclusive)
    pub from: DateTime<Utc>,
    /// End of the period (exclusive)
    pub to: DateTime<Utc>,
}

impl DateRange {
    /// Create a range as supplied by the caller.
    #[must_use]
    pub const fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_deserializes_from_wire_format() {
        let json = r#"{
            "ID": "T1",
            "walletID": "W1",
            "userID": "U1",
            "categoryID": "C1",
            "origin": "nu-bank-email",
            "type": "expense",
            "amount": -42.5,
            "systemDescription": "Market",
            "userDescription": "",
            "date": "2024-03-01T12:00:00Z",
            "processedAt": "2024-03-01T12:05:00Z",
            "createdAt": "2024-03-01T12:06:00Z"
        }"#;

        let transaction: Transaction =
            serde_json::from_str(json).unwrap_or_else(|e| unreachable!("valid fixture: {e}"));
        assert_eq!(transaction.id, TransactionId::new("T1"));
        assert_eq!(transaction.wallet_id, WalletId::new("W1"));
        assert_eq!(transaction.kind, "expense");
        // The wire format carries signed amounts; normalization happens in
        // the fetch effect, not during deserialization.
        assert!((transaction.amount - -42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn wallet_tolerates_missing_sync_addresses() {
        let json = r#"{
            "ID": "W1",
            "name": "Family",
            "role": "owner",
            "joinedAt": "2024-01-15T09:00:00Z"
        }"#;

        let wallet: Wallet =
            serde_json::from_str(json).unwrap_or_else(|e| unreachable!("valid fixture: {e}"));
        assert_eq!(wallet.id, WalletId::new("W1"));
        assert!(wallet.sync_from_emails.is_empty());
    }
}
