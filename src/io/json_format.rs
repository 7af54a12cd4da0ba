//! JSON-lines format handling
//!
//! This module owns the wire format of the authorizer:
//! - Input records (one JSON object per line) and their conversion to [`Operation`]
//! - Output records (one JSON object per authorization)
//!
//! # Input
//!
//! ```text
//! {"account": {"active-card": true, "available-limit": 100}}
//! {"transaction": {"merchant": "Burger King", "amount": 20, "time": "2019-02-13T10:00:00.000Z"}}
//! ```
//!
//! A non-empty `account` selects account creation and any `transaction` on
//! the same line is ignored. An account whose fields are all false or zero
//! counts as empty. A line with no operation at all authorizes a zero-valued
//! transaction. Timestamps accept any RFC 3339 offset and are normalized to UTC.
//!
//! # Output
//!
//! ```text
//! {"account":{"active-card":true,"available-limit":80},"violations":[]}
//! {"account":{},"violations":["account-not-initialized"]}
//! ```

use crate::types::{
    Account, Amount, Authorization, AuthorizerError, Operation, Transaction, Violation,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Raw input line
#[derive(Debug, Deserialize)]
pub struct InputRecord {
    #[serde(default)]
    pub account: Option<AccountInput>,
    #[serde(default)]
    pub transaction: Option<TransactionInput>,
}

/// `account` object of an input line
///
/// Both fields are optional and default to false / 0; a zero-valued object is
/// treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct AccountInput {
    #[serde(rename = "active-card")]
    pub active_card: Option<bool>,
    #[serde(rename = "available-limit")]
    pub available_limit: Option<Amount>,
}

impl AccountInput {
    pub fn is_empty(&self) -> bool {
        !self.active_card.unwrap_or_default() && self.available_limit.unwrap_or_default() == 0
    }
}

/// `transaction` object of an input line
#[derive(Debug, Deserialize)]
pub struct TransactionInput {
    pub merchant: String,
    pub amount: Amount,
    pub time: DateTime<Utc>,
}

/// Output line for a single authorization
#[derive(Debug, Serialize)]
pub struct OutputRecord<'a> {
    account: AccountOutput<'a>,
    violations: &'a [Violation],
}

/// Account part of an output line; `{}` when no account exists
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum AccountOutput<'a> {
    Present(&'a Account),
    Absent {},
}

impl<'a> From<&'a Authorization> for OutputRecord<'a> {
    fn from(authorization: &'a Authorization) -> Self {
        let account = match &authorization.account {
            Some(account) => AccountOutput::Present(account),
            None => AccountOutput::Absent {},
        };
        OutputRecord {
            account,
            violations: &authorization.violations,
        }
    }
}

/// Convert a deserialized input record into an operation
///
/// A record carrying neither a non-empty account nor a transaction becomes
/// a zero-valued transaction: amount 0, no merchant, earliest instant.
pub fn convert_input_record(record: InputRecord) -> Operation {
    match record {
        InputRecord {
            account: Some(account),
            ..
        } if !account.is_empty() => Operation::CreateAccount {
            active_card: account.active_card.unwrap_or_default(),
            available_limit: account.available_limit.unwrap_or_default(),
        },
        InputRecord {
            transaction: Some(tx),
            ..
        } => Operation::Authorize(Transaction::new(tx.amount, tx.merchant, tx.time)),
        _ => Operation::Authorize(Transaction::new(0, String::new(), DateTime::<Utc>::MIN_UTC)),
    }
}

/// Parse one input line into an operation
///
/// # Arguments
///
/// * `input` - The raw line, without its terminator
/// * `line` - 1-based line number, used in error messages
///
/// # Errors
///
/// Returns [`AuthorizerError::ParseError`] when the line is not a valid record.
pub fn parse_operation(input: &str, line: u64) -> Result<Operation, AuthorizerError> {
    let record: InputRecord =
        serde_json::from_str(input).map_err(|e| AuthorizerError::parse(line, &e))?;
    Ok(convert_input_record(record))
}

/// Render an authorization as a single JSON line, without terminator
pub fn format_authorization(authorization: &Authorization) -> Result<String, AuthorizerError> {
    serde_json::to_string(&OutputRecord::from(authorization)).map_err(|e| {
        AuthorizerError::IoError {
            message: e.to_string(),
        }
    })
}

/// Write an authorization as one line and flush immediately
pub fn write_authorization(
    authorization: &Authorization,
    output: &mut dyn Write,
) -> Result<(), AuthorizerError> {
    let line = format_authorization(authorization)?;
    writeln!(output, "{}", line)?;
    output.flush()?;
    Ok(())
}
