//! Business rule violations
//!
//! Violations are outcomes, not faults: they travel inside an
//! [`Authorization`] and never abort processing.

use super::account::Account;
use serde::Serialize;
use std::fmt;

/// Closed set of business rule failure codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Violation {
    /// No account has been created yet
    AccountNotInitialized,
    /// An account already exists and cannot be created again
    AccountAlreadyInitialized,
    /// The account's card is not active
    CardNotActive,
    /// The transaction amount exceeds the available limit
    InsufficientLimit,
    /// Too many approved transactions inside the trailing window
    HighFrequencySmallInterval,
    /// Same amount and merchant already approved inside the trailing window
    DoubleTransaction,
}

impl Violation {
    /// Wire code of the violation
    pub fn as_str(&self) -> &'static str {
        match self {
            Violation::AccountNotInitialized => "account-not-initialized",
            Violation::AccountAlreadyInitialized => "account-already-initialized",
            Violation::CardNotActive => "card-not-active",
            Violation::InsufficientLimit => "insufficient-limit",
            Violation::HighFrequencySmallInterval => "high-frequency-small-interval",
            Violation::DoubleTransaction => "double-transaction",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single operation
///
/// Pairs the account snapshot with the violations found, in evaluation
/// order. `account` is `None` only when no account exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorization {
    pub account: Option<Account>,
    pub violations: Vec<Violation>,
}

impl Authorization {
    /// Outcome with no violations
    pub fn approved(account: Account) -> Self {
        Authorization {
            account: Some(account),
            violations: Vec::new(),
        }
    }

    /// Outcome carrying the unchanged account and the violations found
    pub fn rejected(account: Option<Account>, violations: Vec<Violation>) -> Self {
        Authorization {
            account,
            violations,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.violations.is_empty()
    }
}
