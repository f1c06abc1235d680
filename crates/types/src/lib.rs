//! Canonical ledger record types for the Alexandria tokenomics tooling.
//!
//! The decoded-block supplier projects raw ICRC-1 blocks into the
//! [`TransactionRecord`] shape defined here; the economics crate consumes
//! those records without touching the wire format.
//!
//! Monetary convention: amounts carry 8 fractional digits
//! (1 token = 100_000_000 base units).

pub mod account;
pub mod record;

pub use account::*;
pub use record::*;
