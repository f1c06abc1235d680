//! Decoded ledger entries.
//!
//! A [`TransactionRecord`] is one block of the ledger after the wire
//! decoding step: field presence is expressed with `Option` rather than
//! runtime map lookups, and amounts are exact decimals.

use crate::account::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Operation tag carried by a ledger block.
///
/// The vocabulary is open: tags this tooling does not know about are kept
/// verbatim in [`Operation::Other`]. Only [`Operation::Transfer`]
/// participates in stake reduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operation {
    Mint,
    Burn,
    Transfer,
    Approve,
    Other(String),
}

impl Operation {
    pub fn is_transfer(&self) -> bool {
        matches!(self, Operation::Transfer)
    }
}

impl From<String> for Operation {
    fn from(value: String) -> Self {
        match value.as_str() {
            "mint" => Operation::Mint,
            "burn" => Operation::Burn,
            "xfer" => Operation::Transfer,
            "approve" => Operation::Approve,
            _ => Operation::Other(value),
        }
    }
}

impl From<Operation> for String {
    fn from(value: Operation) -> Self {
        match value {
            Operation::Mint => "mint".to_string(),
            Operation::Burn => "burn".to_string(),
            Operation::Transfer => "xfer".to_string(),
            Operation::Approve => "approve".to_string(),
            Operation::Other(tag) => tag,
        }
    }
}

/// One decoded ledger entry.
///
/// `id` is the ledger position (monotonically non-decreasing, unique);
/// `timestamp` is a nanosecond-resolution instant. Optional fields are
/// present only when the operation semantically includes them; every
/// transfer is expected to carry an `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: u64,
    /// Nanoseconds since the Unix epoch.
    pub timestamp: u64,
    pub operation: Operation,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "amount_string")]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "amount_string")]
    pub fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<AccountId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<AccountId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spender: Option<AccountId>,
}

impl TransactionRecord {
    /// Whether either endpoint of this record is the given account.
    pub fn involves(&self, account: AccountId) -> bool {
        self.to == Some(account) || self.from == Some(account)
    }

    /// Render the timestamp as an RFC 3339 string.
    pub fn timestamp_rfc3339(&self) -> Result<String, time::Error> {
        let instant = OffsetDateTime::from_unix_timestamp_nanos(self.timestamp as i128)?;
        Ok(instant.format(&Rfc3339)?)
    }
}

/// Format an amount with the canonical 8 fractional digits.
pub fn format_units(amount: Decimal) -> String {
    format!("{amount:.8}")
}

/// Amounts arrive as decimal strings, optionally suffixed with a ticker
/// (`"100.00000000 LBRY"`). The ticker is informational and dropped on
/// input; output is the bare decimal string.
mod amount_string {
    use rust_decimal::Decimal;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(amount) => serializer.serialize_some(&amount.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(text) => {
                let digits = text.split_whitespace().next().unwrap_or("");
                digits
                    .parse::<Decimal>()
                    .map(Some)
                    .map_err(de::Error::custom)
            }
        }
    }
}
