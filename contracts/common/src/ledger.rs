//! Unit-of-Account Ledger
//!
//! Authoritative record of per-depositor balances and their aggregate.
//!
//! ## Invariants
//!
//! - `total_units == Σ balances` after every mutation
//! - No zero entries: a balance that reaches zero is removed
//! - Mutations are all-or-nothing: arithmetic is checked before any write

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::errors::{StrategyError, StrategyResult};
use crate::math::{safe_add, safe_sub};
use crate::types::Address;

/// Per-depositor balances and running total
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Ledger {
    balances: BTreeMap<Address, u64>,
    total_units: u64,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase `depositor`'s balance and the total by `units`
    ///
    /// Returns the new balance. Fails with `ArithmeticOverflow` without
    /// touching state if either sum would overflow.
    pub fn credit(&mut self, depositor: &Address, units: u64) -> StrategyResult<u64> {
        let current = self.balance_of(depositor);
        let new_balance = safe_add(current, units)?;
        let new_total = safe_add(self.total_units, units)?;

        if new_balance > 0 {
            self.balances.insert(*depositor, new_balance);
        }
        self.total_units = new_total;

        debug_assert!(self.verify_conservation().is_ok());
        Ok(new_balance)
    }

    /// Decrease `depositor`'s balance and the total by `units`
    ///
    /// Returns the new balance. Fails with `InsufficientBalance` if
    /// `units` exceeds the balance; the entry is removed when it reaches 0.
    pub fn debit(&mut self, depositor: &Address, units: u64) -> StrategyResult<u64> {
        let current = self.balance_of(depositor);
        if units > current {
            return Err(StrategyError::InsufficientBalance {
                available: current,
                requested: units,
            });
        }

        let new_balance = safe_sub(current, units)?;
        let new_total = safe_sub(self.total_units, units)?;

        if new_balance == 0 {
            self.balances.remove(depositor);
        } else {
            self.balances.insert(*depositor, new_balance);
        }
        self.total_units = new_total;

        debug_assert!(self.verify_conservation().is_ok());
        Ok(new_balance)
    }

    /// Balance of `depositor` (0 if unknown)
    pub fn balance_of(&self, depositor: &Address) -> u64 {
        self.balances.get(depositor).copied().unwrap_or(0)
    }

    /// Sum of all balances
    pub fn total_units(&self) -> u64 {
        self.total_units
    }

    /// Number of depositors with a non-zero balance
    pub fn depositor_count(&self) -> usize {
        self.balances.len()
    }

    /// Iterate `(depositor, balance)` in address order
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &u64)> {
        self.balances.iter()
    }

    /// Recompute Σ balances and compare with the recorded total
    pub fn verify_conservation(&self) -> StrategyResult<()> {
        let sum = self
            .balances
            .values()
            .try_fold(0u64, |acc, b| acc.checked_add(*b))
            .ok_or(StrategyError::ArithmeticOverflow)?;

        if sum != self.total_units {
            return Err(StrategyError::ConservationViolated {
                total: self.total_units,
                sum,
            });
        }
        if self.balances.values().any(|b| *b == 0) {
            return Err(StrategyError::InvalidStateTransition);
        }
        Ok(())
    }
}
