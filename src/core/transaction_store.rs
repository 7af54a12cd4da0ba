//! Transaction log for the trailing-window rules
//!
//! This module provides the in-memory TransactionStore that keeps every
//! approved transaction. The high-frequency and double-transaction rules
//! query it for the transactions inside the trailing window.
//!
//! # Lookup Cost
//!
//! Window queries scan the whole log. With one account per process the log
//! stays small; a time-ordered index would only change performance.

use crate::core::traits::TransactionStore;
use crate::types::Transaction;
use chrono::{DateTime, Utc};

/// Append-only in-memory transaction log
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    /// Approved transactions in arrival order
    transactions: Vec<Transaction>,
}

impl InMemoryTransactionStore {
    /// Create a new empty transaction store
    pub fn new() -> Self {
        InMemoryTransactionStore {
            transactions: Vec::new(),
        }
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Iterate over stored transactions in arrival order
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    fn find_since(&self, since: DateTime<Utc>) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.created_at > since)
            .cloned()
            .collect()
    }
}
