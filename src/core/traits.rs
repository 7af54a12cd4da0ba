//! Core traits for account storage, transaction storage and account access
//!
//! The authorization engine depends only on these contracts, never on a
//! concrete storage type, so persistent backends can be substituted without
//! touching the decision logic.

use crate::types::{Account, AccountError, Amount, Transaction};
use chrono::{DateTime, Utc};

/// Single-account persistence with create-once semantics
pub trait AccountStore {
    /// Store the account if none exists yet
    ///
    /// The first write wins: a second call fails with
    /// [`AccountError::AlreadyInitialized`] carrying the stored account.
    fn create(&mut self, active_card: bool, available_limit: Amount)
        -> Result<Account, AccountError>;

    /// Fetch the stored account
    fn find(&self) -> Result<Account, AccountError>;

    /// Overwrite the available limit of the stored account
    fn set_limit(&mut self, available_limit: Amount);
}

/// Append-only log of approved transactions
pub trait TransactionStore {
    /// Append an approved transaction
    fn append(&mut self, transaction: Transaction);

    /// All stored transactions created strictly after `since`
    ///
    /// Order is not significant to callers.
    fn find_since(&self, since: DateTime<Utc>) -> Vec<Transaction>;
}

/// Account operations the authorization engine relies on
pub trait AccountService {
    /// Fetch the current account
    fn get_account(&self) -> Result<Account, AccountError>;

    /// Set the available limit and return the refreshed account
    fn set_account_limit(&mut self, new_limit: Amount) -> Account;
}
