//! Alexandria Economics — ledger-derived tokenomics state
//!
//! Reconstructs per-account staked balances by replaying transfer records
//! against the staking escrow, and evaluates the piecewise ALEX emission
//! curve to recover the LBRY burned and the active block reward for a
//! given total supply.
//!
//! Both components are pure, synchronous computations over in-memory
//! inputs; all monetary accumulation is exact decimal, never floating
//! point.

pub mod emission;
pub mod errors;
pub mod params;
pub mod stakes;

pub use emission::*;
pub use errors::*;
pub use params::*;
pub use stakes::*;
