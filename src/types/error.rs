//! Error types for the transaction authorizer
//!
//! Two families of errors exist:
//!
//! - **Account errors**: the store reports that the single account is missing
//!   or already exists. These surface to callers as violation codes.
//! - **Authorizer errors**: faults at the process boundary (I/O, malformed
//!   input lines, async runtime failures). These stop processing.
//!
//! Business rule failures are not errors; see [`Violation`](super::Violation).

use super::account::Account;
use super::violation::Violation;
use thiserror::Error;

/// Failure reported by an account store or the account manager
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// No account has been created
    #[error("Account not initialized")]
    NotInitialized,

    /// An account already exists
    ///
    /// Carries the stored account, which the failed creation left untouched.
    #[error("Account already initialized (active-card: {}, available-limit: {})", account.active_card, account.available_limit)]
    AlreadyInitialized {
        /// The account that was created first
        account: Account,
    },
}

impl AccountError {
    /// Violation code reported to the caller for this failure
    pub fn violation(&self) -> Violation {
        match self {
            AccountError::NotInitialized => Violation::AccountNotInitialized,
            AccountError::AlreadyInitialized { .. } => Violation::AccountAlreadyInitialized,
        }
    }
}

/// Fatal error while processing an input stream
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthorizerError {
    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// An input line is not a valid operation record
    ///
    /// Malformed input aborts the whole stream.
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The async runtime or one of its tasks failed
    #[error("Runtime error: {message}")]
    Runtime {
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for AuthorizerError {
    fn from(error: std::io::Error) -> Self {
        AuthorizerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<tokio::task::JoinError> for AuthorizerError {
    fn from(error: tokio::task::JoinError) -> Self {
        AuthorizerError::runtime(error)
    }
}

impl AuthorizerError {
    /// Create a ParseError for a serde_json failure on the given line
    pub fn parse(line: u64, error: &serde_json::Error) -> Self {
        AuthorizerError::ParseError {
            line: Some(line),
            message: error.to_string(),
        }
    }

    /// Create a Runtime error
    pub fn runtime(error: impl std::fmt::Display) -> Self {
        AuthorizerError::Runtime {
            message: error.to_string(),
        }
    }
}
