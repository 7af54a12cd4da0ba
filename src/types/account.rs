//! Account-related types for the transaction authorizer
//!
//! This module defines the Account structure tracked by the authorizer.
//! At most one account exists per process; it has no explicit identity.

use serde::Serialize;

/// Spendable amount in the smallest currency unit
pub type Amount = i64;

/// Card account state
///
/// Represents the single tracked account: whether its card may spend and
/// how much limit is left. The account is created once and afterwards only
/// mutated by approved transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Account {
    /// Whether the card is allowed to spend
    ///
    /// Transactions against an inactive card are rejected before any other
    /// rule is evaluated.
    pub active_card: bool,

    /// Limit still available for spending
    ///
    /// Debits are only applied after the insufficiency check passes, so
    /// approved transactions never drive this below zero.
    pub available_limit: Amount,
}

impl Account {
    /// Create an account snapshot with the given card status and limit
    pub fn new(active_card: bool, available_limit: Amount) -> Self {
        Account {
            active_card,
            available_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_serializes_with_kebab_case_fields() {
        let account = Account::new(true, 100);
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, r#"{"active-card":true,"available-limit":100}"#);
    }

    #[test]
    fn test_default_account_is_zero_valued() {
        let account = Account::default();
        assert!(!account.active_card);
        assert_eq!(account.available_limit, 0);
    }
}
