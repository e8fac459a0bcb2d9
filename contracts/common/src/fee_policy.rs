//! Fee Policy
//!
//! Computes the protocol fee retained on a withdrawal.
//!
//! fee = floor(units * fee_bps / 10000)
//!
//! A policy above 100% cannot be built, so the fee never exceeds the
//! withdrawn amount.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::fees;
use crate::errors::{StrategyError, StrategyResult};
use crate::math::{apply_bps, safe_sub};

/// Withdrawal fee policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct FeePolicy {
    fee_bps: u64,
}

impl FeePolicy {
    /// Create a policy, rejecting rates above 100%
    pub fn new(fee_bps: u64) -> StrategyResult<Self> {
        if fee_bps > fees::MAX_FEE_BPS {
            return Err(StrategyError::InvalidConfiguration {
                reason: "fee percentage exceeds 10000 bps",
            });
        }
        Ok(Self { fee_bps })
    }

    /// Configured rate in basis points
    pub fn fee_bps(&self) -> u64 {
        self.fee_bps
    }

    /// Fee owed on `units`
    pub fn compute_fee(&self, units: u64) -> StrategyResult<u64> {
        compute_fee(units, self.fee_bps)
    }

    /// Split `units` into `(fee, net)` with `fee + net == units`
    pub fn split(&self, units: u64) -> StrategyResult<(u64, u64)> {
        let fee = self.compute_fee(units)?;
        let net = safe_sub(units, fee)?;
        Ok((fee, net))
    }
}

/// Fee owed on `units` at `fee_bps`
///
/// Rates above 100% are clamped to 100% so the result never exceeds `units`.
pub fn compute_fee(units: u64, fee_bps: u64) -> StrategyResult<u64> {
    apply_bps(units, fee_bps.min(fees::MAX_FEE_BPS))
}
