//! In-memory account storage
//!
//! Holds at most one account for the lifetime of the process.

use crate::core::traits::AccountStore;
use crate::types::{Account, AccountError, Amount};

/// Single-slot account store
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    account: Option<Account>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        InMemoryAccountStore { account: None }
    }
}

impl AccountStore for InMemoryAccountStore {
    fn create(
        &mut self,
        active_card: bool,
        available_limit: Amount,
    ) -> Result<Account, AccountError> {
        if let Some(account) = self.account {
            return Err(AccountError::AlreadyInitialized { account });
        }

        let account = Account::new(active_card, available_limit);
        self.account = Some(account);
        Ok(account)
    }

    fn find(&self) -> Result<Account, AccountError> {
        self.account.ok_or(AccountError::NotInitialized)
    }

    fn set_limit(&mut self, available_limit: Amount) {
        // No-op until the account exists
        if let Some(account) = self.account.as_mut() {
            account.available_limit = available_limit;
        }
    }
}
