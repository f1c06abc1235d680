//! Property tests for the reducer invariants and the emission curve.

use alexandria_economics::*;
use alexandria_types::{AccountId, Operation, TransactionRecord, ACCOUNT_BYTES};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn acct(tag: u8) -> AccountId {
    AccountId::new([tag; ACCOUNT_BYTES])
}

const ESCROW: u8 = 0xEE;

/// (account tag, amount in 1e-8 base units, true = stake / false = unstake)
fn event_strategy() -> impl Strategy<Value = Vec<(u8, i64, bool)>> {
    prop::collection::vec((1u8..=6, 1i64..=1_000_000_000_000, any::<bool>()), 0..64)
}

fn records_from_events(events: &[(u8, i64, bool)]) -> Vec<TransactionRecord> {
    events
        .iter()
        .enumerate()
        .map(|(index, &(tag, base_units, stake))| {
            let (from, to) = if stake {
                (acct(tag), acct(ESCROW))
            } else {
                (acct(ESCROW), acct(tag))
            };
            TransactionRecord {
                id: index as u64 + 1,
                timestamp: (index as u64 + 1) * 1_000_000_000,
                operation: Operation::Transfer,
                amount: Some(Decimal::new(base_units, 8)),
                fee: None,
                from: Some(from),
                to: Some(to),
                spender: None,
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn total_reconciles_with_balances(events in event_strategy()) {
        let records = records_from_events(&events);
        let ledger = reduce_stakes_strict(&records, acct(ESCROW)).unwrap();

        let sum: Decimal = ledger.iter().map(|(_, balance)| *balance).sum();
        prop_assert_eq!(sum, ledger.total());
    }

    #[test]
    fn replay_is_idempotent(events in event_strategy()) {
        let records = records_from_events(&events);
        let first = reduce_stakes_strict(&records, acct(ESCROW)).unwrap();
        let second = reduce_stakes_strict(&records, acct(ESCROW)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn split_reduce_merge_matches_single_pass(
        events in event_strategy(),
        split in 0usize..64,
    ) {
        let records = records_from_events(&events);
        let split = split.min(records.len());

        let whole = reduce_stakes_strict(&records, acct(ESCROW)).unwrap();

        let mut merged = reduce_stakes_strict(&records[..split], acct(ESCROW)).unwrap();
        merged.merge(reduce_stakes_strict(&records[split..], acct(ESCROW)).unwrap());

        prop_assert_eq!(merged.total(), whole.total());
        for (account, balance) in whole.iter() {
            prop_assert_eq!(merged.balance_of(account), *balance);
        }
    }

    #[test]
    fn burned_is_monotone_and_reward_non_increasing(
        a in 0u64..2_000_000_000,
        b in 0u64..2_000_000_000,
    ) {
        let schedule = EmissionSchedule::default();
        let low = Decimal::from(a.min(b));
        let high = Decimal::from(a.max(b));

        let at_low = evaluate_emission(low, &schedule).unwrap();
        let at_high = evaluate_emission(high, &schedule).unwrap();

        prop_assert!(at_low.amount_burned <= at_high.amount_burned);
        prop_assert!(at_low.current_reward >= at_high.current_reward);
    }

    #[test]
    fn burned_never_exceeds_final_threshold(supply in 0u64..u64::MAX) {
        let schedule = EmissionSchedule::default();
        let result = evaluate_emission(Decimal::from(supply), &schedule).unwrap();
        prop_assert!(result.amount_burned <= schedule.final_phase().threshold);
    }
}
