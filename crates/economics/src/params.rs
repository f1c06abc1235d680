//! Emission schedule configuration.
//!
//! The schedule is an ordered list of phases, each pairing a cumulative
//! LBRY-burned threshold with the block reward active until that
//! threshold is reached. It is built once at startup, validated on
//! construction, and never mutated.

use crate::errors::EconomicsError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Numerator of the minted-per-burned exchange rate.
pub const RATE_NUMERATOR: u64 = 3;
/// Denominator of the minted-per-burned exchange rate.
pub const RATE_DENOMINATOR: u64 = 10_000;

/// Production thresholds: cumulative LBRY burned at each phase boundary.
pub const LBRY_THRESHOLDS: [u64; 18] = [
    21_000,
    42_000,
    84_000,
    168_000,
    336_000,
    672_000,
    1_344_000,
    2_688_000,
    5_376_000,
    10_752_000,
    21_504_000,
    43_008_000,
    86_016_000,
    172_032_000,
    344_064_000,
    688_128_000,
    1_376_256_000,
    61_632_592_000,
];

/// Production block rewards per phase, in 1e-4 ALEX units
/// (50_000 = 5.0000 ALEX per block).
pub const ALEX_PER_THRESHOLD: [u64; 18] = [
    50_000, 25_000, 12_500, 6_250, 3_125, 1_562, 781, 391, 195, 98, 49, 24, 12, 6, 3, 2, 1, 1,
];

/// One emission phase: the cumulative burned-unit threshold that closes
/// it, and the block reward while it is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionPhase {
    /// Cumulative LBRY burned (whole units) at which this phase ends.
    pub threshold: u64,
    /// Block reward while this phase is active, in 1e-4 ALEX units.
    pub reward: u64,
}

impl EmissionPhase {
    /// Exact ALEX-minted-per-LBRY-burned rate for this phase:
    /// `reward × 3 / 10_000`. Evaluated in decimal arithmetic so phase
    /// boundaries never drift.
    pub fn rate(&self) -> Decimal {
        Decimal::from(self.reward) * Decimal::from(RATE_NUMERATOR) / Decimal::from(RATE_DENOMINATOR)
    }
}

/// Validated, immutable emission phase table.
///
/// Thresholds are strictly increasing, so every non-negative burned
/// total up to the final threshold maps to exactly one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<EmissionPhase>", into = "Vec<EmissionPhase>")]
pub struct EmissionSchedule {
    phases: Vec<EmissionPhase>,
}

impl EmissionSchedule {
    /// Build a schedule, rejecting empty or non-monotonic phase tables.
    pub fn new(phases: Vec<EmissionPhase>) -> Result<Self, EconomicsError> {
        if phases.is_empty() {
            return Err(EconomicsError::EmptySchedule);
        }

        let mut prev = 0u64;
        for (index, phase) in phases.iter().enumerate() {
            if phase.threshold <= prev {
                return Err(EconomicsError::NonMonotonicThreshold {
                    index,
                    threshold: phase.threshold,
                });
            }
            prev = phase.threshold;
        }

        Ok(Self { phases })
    }

    pub fn phases(&self) -> &[EmissionPhase] {
        &self.phases
    }

    /// The phase that closes the schedule. Construction guarantees at
    /// least one phase exists.
    pub fn final_phase(&self) -> EmissionPhase {
        self.phases[self.phases.len() - 1]
    }
}

impl Default for EmissionSchedule {
    /// The 18-phase ALEX/LBRY production schedule.
    fn default() -> Self {
        let phases = LBRY_THRESHOLDS
            .iter()
            .zip(ALEX_PER_THRESHOLD.iter())
            .map(|(&threshold, &reward)| EmissionPhase { threshold, reward })
            .collect();
        Self { phases }
    }
}

impl TryFrom<Vec<EmissionPhase>> for EmissionSchedule {
    type Error = EconomicsError;

    fn try_from(phases: Vec<EmissionPhase>) -> Result<Self, Self::Error> {
        Self::new(phases)
    }
}

impl From<EmissionSchedule> for Vec<EmissionPhase> {
    fn from(schedule: EmissionSchedule) -> Self {
        schedule.phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_is_valid() {
        let schedule = EmissionSchedule::default();
        assert_eq!(schedule.phases().len(), 18);
        assert_eq!(schedule.final_phase().threshold, 61_632_592_000);
        assert_eq!(schedule.final_phase().reward, 1);

        // Re-validating the production table must succeed.
        EmissionSchedule::new(schedule.phases().to_vec()).unwrap();
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(
            EmissionSchedule::new(vec![]),
            Err(EconomicsError::EmptySchedule)
        );
    }

    #[test]
    fn rejects_non_monotonic_thresholds() {
        let phases = vec![
            EmissionPhase { threshold: 100, reward: 10 },
            EmissionPhase { threshold: 100, reward: 5 },
        ];
        assert_eq!(
            EmissionSchedule::new(phases),
            Err(EconomicsError::NonMonotonicThreshold { index: 1, threshold: 100 })
        );
    }

    #[test]
    fn rejects_zero_first_threshold() {
        let phases = vec![EmissionPhase { threshold: 0, reward: 10 }];
        assert_eq!(
            EmissionSchedule::new(phases),
            Err(EconomicsError::NonMonotonicThreshold { index: 0, threshold: 0 })
        );
    }

    #[test]
    fn phase_rate_is_exact() {
        let phase = EmissionPhase { threshold: 21_000, reward: 50_000 };
        assert_eq!(phase.rate(), Decimal::from(15));

        let phase = EmissionPhase { threshold: 1_000, reward: 100 };
        assert_eq!(phase.rate(), "0.03".parse().unwrap());
    }

    #[test]
    fn serde_rejects_invalid_table() {
        let json = r#"[{"threshold": 10, "reward": 1}, {"threshold": 5, "reward": 1}]"#;
        assert!(serde_json::from_str::<EmissionSchedule>(json).is_err());

        let json = r#"[{"threshold": 10, "reward": 1}]"#;
        let schedule: EmissionSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.phases().len(), 1);
    }
}
