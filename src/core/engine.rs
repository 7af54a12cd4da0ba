//! Transaction authorization engine
//!
//! This module provides the AuthorizationEngine that decides whether the
//! account may spend, coordinating between an [`AccountService`] and a
//! [`TransactionStore`].
//!
//! Rules are evaluated in a fixed order:
//! 1. Account must exist (`account-not-initialized`, stops evaluation)
//! 2. Card must be active (`card-not-active`, stops evaluation)
//! 3. Amount must fit the available limit (`insufficient-limit`)
//! 4. Fewer than the threshold approvals in the trailing window (`high-frequency-small-interval`)
//! 5. No same amount and merchant in the trailing window (`double-transaction`)
//!
//! Checks 3 to 5 all run and accumulate. A transaction is persisted and
//! debited only when no violation is found.

use crate::core::account_manager::AccountManager;
use crate::core::account_store::InMemoryAccountStore;
use crate::core::rules::AuthorizationRules;
use crate::core::traits::{AccountService, AccountStore, TransactionStore};
use crate::core::transaction_store::InMemoryTransactionStore;
use crate::types::{
    Account, AccountError, Amount, Authorization, Operation, Transaction, Violation,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Transaction authorization engine
///
/// Owns the account service and the transaction log; every decision is a
/// synchronous function of their current state.
#[derive(Debug)]
pub struct AuthorizationEngine<A, T> {
    accounts: A,
    transactions: T,
    rules: AuthorizationRules,
}

/// Engine over the in-memory stores
pub type InMemoryAuthorizationEngine =
    AuthorizationEngine<AccountManager<InMemoryAccountStore>, InMemoryTransactionStore>;

impl<A: AccountService, T: TransactionStore> AuthorizationEngine<A, T> {
    /// Create a new engine with the default rules
    pub fn new(accounts: A, transactions: T) -> Self {
        Self::with_rules(accounts, transactions, AuthorizationRules::default())
    }

    /// Create a new engine with custom rule parameters
    pub fn with_rules(accounts: A, transactions: T, rules: AuthorizationRules) -> Self {
        AuthorizationEngine {
            accounts,
            transactions,
            rules,
        }
    }

    /// Authorize a single transaction
    ///
    /// # Returns
    ///
    /// An [`Authorization`] holding:
    /// * no account and `[account-not-initialized]` when the account is missing
    /// * the unchanged account and `[card-not-active]` when the card is inactive
    /// * the unchanged account and the accumulated violations when any rule fails
    /// * the debited account and no violations when the transaction is approved
    pub fn authorize_transaction(&mut self, transaction: Transaction) -> Authorization {
        let account = match self.accounts.get_account() {
            Ok(account) => account,
            Err(err) => {
                debug!(merchant = %transaction.merchant, error = %err, "no account to authorize against");
                return Authorization::rejected(None, vec![err.violation()]);
            }
        };

        if !account.active_card {
            debug!(merchant = %transaction.merchant, "card not active");
            return Authorization::rejected(Some(account), vec![Violation::CardNotActive]);
        }

        let violations = self.evaluate(&account, &transaction);
        if !violations.is_empty() {
            debug!(
                amount = transaction.amount,
                merchant = %transaction.merchant,
                ?violations,
                "transaction rejected"
            );
            return Authorization::rejected(Some(account), violations);
        }

        let new_limit = account.available_limit.saturating_sub(transaction.amount);
        debug!(
            amount = transaction.amount,
            merchant = %transaction.merchant,
            available_limit = new_limit,
            "transaction approved"
        );
        self.transactions.append(transaction);
        let account = self.accounts.set_account_limit(new_limit);

        Authorization::approved(account)
    }

    /// Evaluate the limit, velocity and duplicate rules without short-circuiting
    fn evaluate(&self, account: &Account, transaction: &Transaction) -> Vec<Violation> {
        let mut violations = Vec::new();

        if transaction.amount > account.available_limit {
            violations.push(Violation::InsufficientLimit);
        }

        let window = self.transactions.find_since(self.window_start(transaction));

        if window.len() >= self.rules.high_frequency_threshold {
            violations.push(Violation::HighFrequencySmallInterval);
        }

        // One code at most, however many duplicates the window holds
        if window.iter().any(|past| past.is_duplicate_of(transaction)) {
            violations.push(Violation::DoubleTransaction);
        }

        violations
    }

    /// Exclusive lower bound of the trailing window for `transaction`
    fn window_start(&self, transaction: &Transaction) -> DateTime<Utc> {
        transaction
            .created_at
            .checked_sub_signed(self.rules.window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// The account service backing this engine
    pub fn accounts(&self) -> &A {
        &self.accounts
    }

    /// The transaction log backing this engine
    pub fn transactions(&self) -> &T {
        &self.transactions
    }
}

impl<S: AccountStore, T: TransactionStore> AuthorizationEngine<AccountManager<S>, T> {
    /// Process a single operation
    ///
    /// Routes account creation to the account manager and transactions to
    /// [`authorize_transaction`](Self::authorize_transaction).
    pub fn process(&mut self, operation: Operation) -> Authorization {
        match operation {
            Operation::CreateAccount {
                active_card,
                available_limit,
            } => self.create_account(active_card, available_limit),
            Operation::Authorize(transaction) => self.authorize_transaction(transaction),
        }
    }

    /// Create the account
    ///
    /// A repeated creation reports `account-already-initialized` together
    /// with the account that already exists.
    pub fn create_account(&mut self, active_card: bool, available_limit: Amount) -> Authorization {
        match self.accounts.create_account(active_card, available_limit) {
            Ok(account) => Authorization::approved(account),
            Err(err) => {
                debug!(error = %err, "account creation rejected");
                let account = match &err {
                    AccountError::AlreadyInitialized { account } => Some(*account),
                    AccountError::NotInitialized => None,
                };
                Authorization::rejected(account, vec![err.violation()])
            }
        }
    }
}

impl InMemoryAuthorizationEngine {
    /// Engine over fresh in-memory stores
    pub fn in_memory(rules: AuthorizationRules) -> Self {
        AuthorizationEngine::with_rules(
            AccountManager::new(InMemoryAccountStore::new()),
            InMemoryTransactionStore::new(),
            rules,
        )
    }
}

impl Default for InMemoryAuthorizationEngine {
    fn default() -> Self {
        Self::in_memory(AuthorizationRules::default())
    }
}
