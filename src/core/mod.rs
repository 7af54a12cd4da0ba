//! Core business logic module
//!
//! This module contains the authorization components:
//! - `traits` - Store and account service contracts
//! - `account_store` - In-memory single-account store
//! - `transaction_store` - In-memory approved transaction log
//! - `account_manager` - Account lifecycle (create, get, set limit)
//! - `rules` - Window and frequency parameters
//! - `engine` - The authorization decision algorithm
//! - `async` - Serialized engine handle for concurrent callers

pub mod account_manager;
pub mod account_store;
pub mod r#async;
pub mod engine;
pub mod rules;
pub mod traits;
pub mod transaction_store;

pub use account_manager::AccountManager;
pub use account_store::InMemoryAccountStore;
pub use engine::{AuthorizationEngine, InMemoryAuthorizationEngine};
pub use r#async::AsyncAuthorizationEngine;
pub use rules::AuthorizationRules;
pub use traits::{AccountService, AccountStore, TransactionStore};
pub use transaction_store::InMemoryTransactionStore;
