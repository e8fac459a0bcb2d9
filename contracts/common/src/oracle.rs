//! Conversion Oracle
//!
//! Converts native value into the unit of account and back. Price
//! discovery lives outside this crate; the vault only sees the
//! [`ConversionOracle`] trait.
//!
//! Implementations must be monotonically non-decreasing for a fixed
//! oracle state. Output is accepted as-is, including 0 for inputs below
//! the oracle's resolution.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::oracle::PRICE_SCALE;
use crate::errors::{StrategyError, StrategyResult};
use crate::math::mul_div_floor;

/// Native value <-> unit-of-account conversion
pub trait ConversionOracle {
    /// Units credited for `native_amount`
    fn native_to_units(&self, native_amount: u64) -> StrategyResult<u64>;

    /// Native value paid out for `units`
    fn units_to_native(&self, units: u64) -> StrategyResult<u64>;
}

impl<T: ConversionOracle + ?Sized> ConversionOracle for &T {
    fn native_to_units(&self, native_amount: u64) -> StrategyResult<u64> {
        (**self).native_to_units(native_amount)
    }

    fn units_to_native(&self, units: u64) -> StrategyResult<u64> {
        (**self).units_to_native(units)
    }
}

/// Deterministic fixed-rate oracle
///
/// `price` units are worth `scale` native base units. Both directions
/// round down, so a deposit followed by a full withdrawal never pays out
/// more native value than was deposited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct FixedRateOracle {
    price: u64,
    scale: u64,
}

impl FixedRateOracle {
    /// Create an oracle quoting `price` units per `scale` native
    pub fn new(price: u64, scale: u64) -> StrategyResult<Self> {
        if price == 0 {
            return Err(StrategyError::InvalidConfiguration {
                reason: "oracle price must be positive",
            });
        }
        if scale == 0 {
            return Err(StrategyError::InvalidConfiguration {
                reason: "oracle scale must be positive",
            });
        }
        Ok(Self { price, scale })
    }

    /// Oracle quoting `price` units per whole native token
    pub fn per_native_token(price: u64) -> StrategyResult<Self> {
        Self::new(price, PRICE_SCALE)
    }

    /// One unit per native base unit
    pub fn identity() -> Self {
        Self { price: 1, scale: 1 }
    }

    /// Quoted price
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Native base units the price refers to
    pub fn scale(&self) -> u64 {
        self.scale
    }
}

impl ConversionOracle for FixedRateOracle {
    fn native_to_units(&self, native_amount: u64) -> StrategyResult<u64> {
        mul_div_floor(native_amount, self.price, self.scale)
    }

    fn units_to_native(&self, units: u64) -> StrategyResult<u64> {
        mul_div_floor(units, self.scale, self.price)
    }
}
