//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state
//! - `transaction`: Transactions and input operations
//! - `violation`: Violation codes and authorization outcomes
//! - `error`: Error types for the authorizer

pub mod account;
pub mod error;
pub mod transaction;
pub mod violation;

pub use account::{Account, Amount};
pub use error::{AccountError, AuthorizerError};
pub use transaction::{Operation, Transaction};
pub use violation::{Authorization, Violation};
