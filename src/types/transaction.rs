//! Transaction-related types for the transaction authorizer
//!
//! This module defines the timestamped spend request evaluated by the
//! authorization engine and the operations read from the input stream.

use super::account::Amount;
use chrono::{DateTime, Utc};

/// Spend request submitted for authorization
///
/// Immutable once constructed. Only transactions that produce no violations
/// are persisted; rejected ones are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Amount to debit from the available limit
    pub amount: Amount,

    /// Merchant the card is being charged by
    pub merchant: String,

    /// Moment the transaction happened, normalized to UTC
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(amount: Amount, merchant: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Transaction {
            amount,
            merchant: merchant.into(),
            created_at,
        }
    }

    /// Whether `other` charges the same amount at the same merchant
    pub fn is_duplicate_of(&self, other: &Transaction) -> bool {
        self.amount == other.amount && self.merchant == other.merchant
    }
}

/// Operation requested by a single input line
///
/// A line either creates the account or submits a transaction for
/// authorization, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Initialize the account
    ///
    /// Fails with `account-already-initialized` when an account exists.
    CreateAccount {
        active_card: bool,
        available_limit: Amount,
    },

    /// Run the authorization rules against a transaction
    Authorize(Transaction),
}
