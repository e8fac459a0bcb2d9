//! Strategy Common Library
//!
//! Accounting primitives for the Strategy vault: a single-asset vault
//! that takes native value, books it as USDC-equivalent units, and pays
//! depositors back net of a protocol fee.
//!
//! ## Components
//!
//! - **Ledger**: per-depositor balances and their conserved total
//! - **Fee Policy**: basis-point withdrawal fee, never above 100%
//! - **Access Control**: single admin fixed at construction
//! - **Conversion Oracle**: injected native <-> unit conversion
//! - **Events**: append-only Deposit / Withdraw records
//!
//! This crate is `no_std` compatible when built without the `std`
//! feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Re-export Vec for submodules based on feature
#[cfg(not(feature = "std"))]
pub use alloc::vec::Vec;
#[cfg(feature = "std")]
pub use std::vec::Vec;

pub mod constants;
pub mod errors;
pub mod types;
pub mod math;
pub mod events;
pub mod access_control;
pub mod fee_policy;
pub mod ledger;
pub mod oracle;

// Re-exports for convenience
pub use errors::*;
pub use types::*;
pub use events::*;
pub use access_control::AccessControl;
pub use fee_policy::{compute_fee, FeePolicy};
pub use ledger::Ledger;
pub use oracle::{ConversionOracle, FixedRateOracle};
