//! Mathematical Utilities for the Strategy vault
//!
//! Checked arithmetic only. Every helper fails closed with
//! `ArithmeticOverflow` instead of wrapping.

use crate::constants::fees;
use crate::errors::{StrategyError, StrategyResult};

/// Safe addition with overflow check
pub fn safe_add(a: u64, b: u64) -> StrategyResult<u64> {
    a.checked_add(b).ok_or(StrategyError::ArithmeticOverflow)
}

/// Safe subtraction with underflow check
pub fn safe_sub(a: u64, b: u64) -> StrategyResult<u64> {
    a.checked_sub(b).ok_or(StrategyError::ArithmeticOverflow)
}

/// Computes `floor(amount * numerator / denominator)` through a `u128` intermediate
///
/// Fails if the denominator is zero or the quotient does not fit in `u64`.
pub fn mul_div_floor(amount: u64, numerator: u64, denominator: u64) -> StrategyResult<u64> {
    let product = (amount as u128)
        .checked_mul(numerator as u128)
        .ok_or(StrategyError::ArithmeticOverflow)?;
    let quotient = product
        .checked_div(denominator as u128)
        .ok_or(StrategyError::ArithmeticOverflow)?;
    u64::try_from(quotient).map_err(|_| StrategyError::ArithmeticOverflow)
}

/// Applies a basis-point rate to an amount, rounding down
///
/// bps_amount = floor(amount * bps / 10000)
pub fn apply_bps(amount: u64, bps: u64) -> StrategyResult<u64> {
    mul_div_floor(amount, bps, fees::BPS_DENOMINATOR)
}
