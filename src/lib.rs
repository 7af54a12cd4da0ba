//! Transaction Authorizer Library
//! # Overview
//!
//! This library authorizes card transactions against a single account. It
//! reads a stream of JSON-lines operations, applies the business rules to
//! each one and emits the resulting account state plus any violations.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, Violation, errors)
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - The authorization decision algorithm
//!   - [`core::account_manager`] - Account creation and limit updates
//!   - [`core::transaction_store`] - Approved transactions for the window rules
//!   - [`core::r#async`] - Serialized engine handle for concurrent callers
//! - [`io`] - JSON-lines reading and writing
//! - [`strategy`] - Sync and pipelined async processing
//!
//! # Rules
//!
//! A transaction is checked, in this order, for:
//!
//! - **account-not-initialized**: No account exists (reported alone)
//! - **card-not-active**: The card is inactive (reported alone)
//! - **insufficient-limit**: The amount exceeds the available limit
//! - **high-frequency-small-interval**: Three approved transactions already
//!   fall inside the trailing two minutes
//! - **double-transaction**: An approved transaction with the same merchant
//!   and amount falls inside the trailing two minutes
//!
//! Approved transactions debit the limit and join the window; rejected ones
//! leave no trace.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{AuthorizationEngine, AuthorizationRules, InMemoryAuthorizationEngine};
pub use io::write_authorization;
pub use types::{
    Account, AccountError, Amount, Authorization, AuthorizerError, Operation, Transaction,
    Violation,
};
