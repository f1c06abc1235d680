//! Emission curve evaluation.
//!
//! Walks the phase table in threshold order to recover, for a given
//! cumulative ALEX supply, how much LBRY must have been burned and which
//! block reward is currently active. All intermediate arithmetic is
//! exact decimal; the burned total is rounded to a whole unit only once,
//! at the very end.

use crate::errors::EconomicsError;
use crate::params::EmissionSchedule;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of evaluating the emission curve at one supply point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionResult {
    /// Whole LBRY units burned to mint the given supply.
    pub amount_burned: u64,
    /// Block reward active at the supply point, in 1e-4 ALEX units.
    pub current_reward: u64,
}

/// Evaluate the emission curve at `total_minted_supply` whole ALEX units.
///
/// A supply landing exactly on a phase's cumulative minted capacity
/// resolves inside that phase (the `>=` closes the current phase); a
/// supply beyond the schedule's total capacity clamps to the final
/// threshold and the final reward.
pub fn evaluate_emission(
    total_minted_supply: Decimal,
    schedule: &EmissionSchedule,
) -> Result<EmissionResult, EconomicsError> {
    if total_minted_supply < Decimal::ZERO {
        return Err(EconomicsError::NegativeSupply {
            supply: total_minted_supply,
        });
    }

    let mut burned = Decimal::ZERO;
    let mut minted = Decimal::ZERO;
    let mut prev_threshold = 0u64;

    for (index, phase) in schedule.phases().iter().enumerate() {
        let rate = phase.rate();
        let burned_in_phase = Decimal::from(phase.threshold - prev_threshold);
        let minted_in_phase = burned_in_phase * rate;

        if minted + minted_in_phase >= total_minted_supply {
            let remaining = total_minted_supply - minted;
            burned += remaining / rate;
            debug!(
                phase = index,
                reward = phase.reward,
                "supply target reached inside phase"
            );
            return Ok(EmissionResult {
                amount_burned: round_to_whole_units(burned),
                current_reward: phase.reward,
            });
        }

        burned += burned_in_phase;
        minted += minted_in_phase;
        prev_threshold = phase.threshold;
    }

    // Supply exceeds the schedule's capacity: everything has been burned.
    let last = schedule.final_phase();
    debug!(
        reward = last.reward,
        "supply beyond schedule capacity, clamping to final phase"
    );
    Ok(EmissionResult {
        amount_burned: last.threshold,
        current_reward: last.reward,
    })
}

/// Terminal rounding to a whole burned unit, half to even.
///
/// Bounded by the final threshold, so the conversion cannot overflow.
fn round_to_whole_units(burned: Decimal) -> u64 {
    burned.round().to_u64().unwrap_or(u64::MAX)
}
