use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while reducing the stake ledger or evaluating
/// the emission curve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EconomicsError {
    #[error("transfer record {id} is missing required field `{field}`")]
    MalformedRecord { id: u64, field: &'static str },

    #[error("record {id} transfers from the staking address to itself")]
    AmbiguousSelfTransfer { id: u64 },

    #[error("emission schedule contains no phases")]
    EmptySchedule,

    #[error("emission schedule threshold at phase {index} is not strictly increasing: {threshold}")]
    NonMonotonicThreshold { index: usize, threshold: u64 },

    #[error("total minted supply cannot be negative: {supply}")]
    NegativeSupply { supply: Decimal },
}
