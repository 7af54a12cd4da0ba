//! Account management module
//!
//! This module provides the `AccountManager` struct which owns the account
//! lifecycle on top of an [`AccountStore`].
//!
//! The AccountManager is responsible for:
//! - Creating the account exactly once
//! - Retrieving the current account
//! - Applying new limits, clamped at zero

use crate::core::traits::{AccountService, AccountStore};
use crate::types::{Account, AccountError, Amount};
use tracing::{debug, info};

/// Manages the single account and its limit
///
/// The AccountManager owns its store; there is no process-wide instance.
#[derive(Debug, Default)]
pub struct AccountManager<S> {
    store: S,
}

impl<S: AccountStore> AccountManager<S> {
    /// Create a new AccountManager over the given store
    pub fn new(store: S) -> Self {
        AccountManager { store }
    }

    /// Create the account
    ///
    /// # Arguments
    ///
    /// * `active_card` - Whether the card may spend
    /// * `available_limit` - Initial spendable limit
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The newly stored account
    /// * `Err(AccountError::AlreadyInitialized)` - An account exists; the error
    ///   carries it unmodified
    pub fn create_account(
        &mut self,
        active_card: bool,
        available_limit: Amount,
    ) -> Result<Account, AccountError> {
        let account = self.store.create(active_card, available_limit)?;
        info!(
            active_card = account.active_card,
            available_limit = account.available_limit,
            "account created"
        );
        Ok(account)
    }
}

impl<S: AccountStore> AccountService for AccountManager<S> {
    fn get_account(&self) -> Result<Account, AccountError> {
        self.store.find()
    }

    /// Negative limits are clamped to zero before being stored.
    fn set_account_limit(&mut self, new_limit: Amount) -> Account {
        let new_limit = new_limit.max(0);
        self.store.set_limit(new_limit);
        debug!(available_limit = new_limit, "account limit updated");

        // Store writes are assumed to succeed
        self.store.find().unwrap_or_default()
    }
}
