//! Stake ledger reduction.
//!
//! Replays transfer records against the staking escrow address to derive
//! per-account staked balances and the aggregate staked total. Transfers
//! into the escrow credit the sender's stake; transfers out of it debit
//! the receiver's stake. Everything else is filtered out before the fold.

use crate::errors::EconomicsError;
use alexandria_types::{AccountId, TransactionRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Per-account staked balances plus the aggregate total.
///
/// Balances are signed exact decimals: an account that unstaked more
/// than this sequence shows it staking goes negative rather than being
/// silently clamped. The total is maintained incrementally and always
/// equals the sum of the balances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StakeLedger {
    balances: HashMap<AccountId, Decimal>,
    total: Decimal,
}

impl StakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a signed stake delta to one account, keeping the total in
    /// step with the balances.
    pub fn apply(&mut self, account: AccountId, delta: Decimal) {
        *self.balances.entry(account).or_insert(Decimal::ZERO) += delta;
        self.total += delta;
    }

    pub fn balance_of(&self, account: &AccountId) -> Decimal {
        self.balances.get(account).copied().unwrap_or(Decimal::ZERO)
    }

    /// Aggregate staked total across all accounts.
    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &Decimal)> {
        self.balances.iter()
    }

    /// Fold another partial ledger into this one, summing balances per
    /// account. Merging is associative and commutative, so a record
    /// sequence may be sharded, reduced in parts, and merged in any
    /// order without changing the result.
    pub fn merge(&mut self, other: StakeLedger) {
        for (account, delta) in other.balances {
            *self.balances.entry(account).or_insert(Decimal::ZERO) += delta;
        }
        self.total += other.total;
    }
}

/// How the reducer treats a qualifying transfer missing a required field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalformedPolicy {
    /// Fail the whole pass. Silently dropping a transfer would break the
    /// reconciliation between balances and total.
    #[default]
    Fail,
    /// Skip the record and log it.
    Skip,
}

/// How the reducer treats a transfer whose endpoints are both the escrow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelfTransferPolicy {
    /// Surface the record as [`EconomicsError::AmbiguousSelfTransfer`]
    /// and let the caller decide.
    #[default]
    Fail,
    /// Apply the destination-wins rule of the upstream ledger tooling:
    /// the escrow is credited as its own counterparty.
    Stake,
    /// Drop the record from the pass.
    Ignore,
}

/// Caller policy for the edge cases of a reduction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducerPolicy {
    pub malformed: MalformedPolicy,
    pub self_transfer: SelfTransferPolicy,
}

/// Reduce a record sequence into a [`StakeLedger`] for the given escrow.
///
/// Records are folded in the order given, which is expected to be ledger
/// order (ascending `id`). Only transfers touching `staking_address`
/// qualify; the input is never mutated and the ledger is built fresh, so
/// replaying the same sequence always yields the same result.
pub fn reduce_stakes(
    records: &[TransactionRecord],
    staking_address: AccountId,
    policy: &ReducerPolicy,
) -> Result<StakeLedger, EconomicsError> {
    let mut ledger = StakeLedger::new();

    for record in records {
        if !record.operation.is_transfer() || !record.involves(staking_address) {
            if record.operation.is_transfer()
                && record.to.is_none()
                && record.from.is_none()
            {
                // Endpoint-less transfers cannot even be classified.
                skip_or_fail(policy, record.id, "to/from")?;
            }
            continue;
        }

        let to_escrow = record.to == Some(staking_address);
        let from_escrow = record.from == Some(staking_address);

        if to_escrow && from_escrow {
            match policy.self_transfer {
                SelfTransferPolicy::Fail => {
                    return Err(EconomicsError::AmbiguousSelfTransfer { id: record.id })
                }
                SelfTransferPolicy::Ignore => {
                    warn!(id = record.id, "ignoring self-transfer into the escrow");
                    continue;
                }
                // Destination wins: fall through to the staking branch.
                SelfTransferPolicy::Stake => {}
            }
        }

        let Some(amount) = record.amount else {
            skip_or_fail(policy, record.id, "amount")?;
            continue;
        };

        if to_escrow {
            let Some(counterparty) = record.from else {
                skip_or_fail(policy, record.id, "from")?;
                continue;
            };
            ledger.apply(counterparty, amount);
        } else {
            let Some(counterparty) = record.to else {
                skip_or_fail(policy, record.id, "to")?;
                continue;
            };
            ledger.apply(counterparty, -amount);
        }
    }

    debug!(
        accounts = ledger.len(),
        total = %ledger.total(),
        "stake reduction complete"
    );
    Ok(ledger)
}

/// Reduce with the default policy: malformed records and ambiguous
/// self-transfers fail the whole pass.
pub fn reduce_stakes_strict(
    records: &[TransactionRecord],
    staking_address: AccountId,
) -> Result<StakeLedger, EconomicsError> {
    reduce_stakes(records, staking_address, &ReducerPolicy::default())
}

fn skip_or_fail(
    policy: &ReducerPolicy,
    id: u64,
    field: &'static str,
) -> Result<(), EconomicsError> {
    match policy.malformed {
        MalformedPolicy::Fail => Err(EconomicsError::MalformedRecord { id, field }),
        MalformedPolicy::Skip => {
            warn!(id, field, "skipping malformed transfer record");
            Ok(())
        }
    }
}
