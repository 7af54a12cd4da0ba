//! Serialized authorization for concurrent callers
//!
//! This module provides the `AsyncAuthorizationEngine`, a cloneable handle
//! over a single [`AuthorizationEngine`] that can be shared across tasks.
//!
//! # Architecture
//!
//! ```text
//! AsyncAuthorizationEngine (Clone)
//!     └── Arc<tokio::sync::Mutex<AuthorizationEngine>>
//!             ├── AccountManager   (account read, limit write)
//!             └── TransactionStore (window read, append)
//! ```
//!
//! # Thread Safety
//!
//! Every call holds the mutex from the account read to the limit write. Two
//! concurrent authorizations can therefore never both pass the limit check
//! against the same stale limit. The account and the transaction log sit
//! behind the same lock.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::account_manager::AccountManager;
use crate::core::account_store::InMemoryAccountStore;
use crate::core::engine::AuthorizationEngine;
use crate::core::rules::AuthorizationRules;
use crate::core::traits::{AccountService, AccountStore, TransactionStore};
use crate::core::transaction_store::InMemoryTransactionStore;
use crate::types::{Account, AccountError, Amount, Authorization, Operation, Transaction};

/// Shareable, serialized authorization engine
///
/// Cloning is cheap and every clone drives the same underlying engine.
#[derive(Debug)]
pub struct AsyncAuthorizationEngine<S, T> {
    inner: Arc<Mutex<AuthorizationEngine<AccountManager<S>, T>>>,
}

impl<S, T> Clone for AsyncAuthorizationEngine<S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, T> AsyncAuthorizationEngine<S, T>
where
    S: AccountStore + Send,
    T: TransactionStore + Send,
{
    /// Wrap an engine so it can be shared across tasks
    pub fn new(engine: AuthorizationEngine<AccountManager<S>, T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Process a single operation inside the critical section
    pub async fn process(&self, operation: Operation) -> Authorization {
        self.inner.lock().await.process(operation)
    }

    /// Authorize a transaction inside the critical section
    pub async fn authorize_transaction(&self, transaction: Transaction) -> Authorization {
        self.inner.lock().await.authorize_transaction(transaction)
    }

    /// Create the account inside the critical section
    pub async fn create_account(&self, active_card: bool, available_limit: Amount) -> Authorization {
        self.inner
            .lock()
            .await
            .create_account(active_card, available_limit)
    }

    /// Snapshot of the current account
    pub async fn account(&self) -> Result<Account, AccountError> {
        self.inner.lock().await.accounts().get_account()
    }
}

impl AsyncAuthorizationEngine<InMemoryAccountStore, InMemoryTransactionStore> {
    /// Shared engine over fresh in-memory stores
    pub fn in_memory(rules: AuthorizationRules) -> Self {
        Self::new(AuthorizationEngine::in_memory(rules))
    }

    /// Number of approved transactions
    pub async fn approved_count(&self) -> usize {
        self.inner.lock().await.transactions().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Violation;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use futures::future::join_all;

    type InMemoryAsyncEngine =
        AsyncAuthorizationEngine<InMemoryAccountStore, InMemoryTransactionStore>;

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 2, 13, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_engine_is_send_sync_and_cloneable() {
        fn assert_send_sync<E: Send + Sync + Clone>() {}
        assert_send_sync::<InMemoryAsyncEngine>();
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let engine = InMemoryAsyncEngine::in_memory(AuthorizationRules::default());
        let other = engine.clone();

        engine.create_account(true, 100).await;
        let result = other
            .authorize_transaction(Transaction::new(40, "ifood", base_time()))
            .await;

        assert_eq!(result, Authorization::approved(Account::new(true, 60)));
        assert_eq!(engine.account().await, Ok(Account::new(true, 60)));
    }

    #[tokio::test]
    async fn test_process_without_account() {
        let engine = InMemoryAsyncEngine::in_memory(AuthorizationRules::default());

        let result = engine
            .process(Operation::Authorize(Transaction::new(1, "ifood", base_time())))
            .await;

        assert_eq!(result.account, None);
        assert_eq!(result.violations, vec![Violation::AccountNotInitialized]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_cannot_double_spend() {
        let engine = InMemoryAsyncEngine::in_memory(AuthorizationRules::default());
        engine.create_account(true, 100).await;

        // Spread an hour apart with distinct merchants so only the limit rule applies
        let tasks = (0..16).map(|i| {
            let engine = engine.clone();
            tokio::spawn(async move {
                let created_at = base_time() + Duration::hours(i);
                engine
                    .authorize_transaction(Transaction::new(60, format!("merchant-{i}"), created_at))
                    .await
            })
        });

        let results: Vec<Authorization> = join_all(tasks)
            .await
            .into_iter()
            .map(|joined| joined.unwrap())
            .collect();

        let approved = results.iter().filter(|r| r.is_approved()).count();
        assert_eq!(approved, 1);
        assert!(results
            .iter()
            .filter(|r| !r.is_approved())
            .all(|r| r.violations == vec![Violation::InsufficientLimit]));
        assert_eq!(engine.account().await, Ok(Account::new(true, 40)));
        assert_eq!(engine.approved_count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_burst_respects_frequency_rule() {
        let engine = InMemoryAsyncEngine::in_memory(AuthorizationRules::default());
        engine.create_account(true, 1_000).await;

        let tasks = (0..10).map(|i| {
            let engine = engine.clone();
            tokio::spawn(async move {
                let created_at = base_time() + Duration::seconds(i);
                engine
                    .authorize_transaction(Transaction::new(10, format!("merchant-{i}"), created_at))
                    .await
            })
        });

        let approved = join_all(tasks)
            .await
            .into_iter()
            .filter(|joined| joined.as_ref().unwrap().is_approved())
            .count();

        // Arrival order varies, but the window never admits more than three
        assert_eq!(approved, 3);
        assert_eq!(engine.account().await, Ok(Account::new(true, 970)));
    }
}
